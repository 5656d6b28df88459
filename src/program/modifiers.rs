//! Bitflag set describing the modifiers attached to a declaration.

use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u32 {
        const EXPORT = 1 << 0;
        const DECLARE = 1 << 1;
        const DEFAULT = 1 << 2;
        const CONST = 1 << 3;
        const PUBLIC = 1 << 4;
        const PRIVATE = 1 << 5;
        const PROTECTED = 1 << 6;
        const STATIC = 1 << 7;
        const READONLY = 1 << 8;
        const ABSTRACT = 1 << 9;
        const ASYNC = 1 << 10;
        const OVERRIDE = 1 << 11;
    }
}

impl ModifierFlags {
    /// Maps a source keyword (`export`, `static`, ...) onto its flag.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let flag = match keyword {
            "export" => Self::EXPORT,
            "declare" => Self::DECLARE,
            "default" => Self::DEFAULT,
            "const" => Self::CONST,
            "public" => Self::PUBLIC,
            "private" => Self::PRIVATE,
            "protected" => Self::PROTECTED,
            "static" => Self::STATIC,
            "readonly" => Self::READONLY,
            "abstract" => Self::ABSTRACT,
            "async" => Self::ASYNC,
            "override" => Self::OVERRIDE,
            _ => return None,
        };
        Some(flag)
    }

    /// Stable text form, flag names in declaration order joined by `" | "`.
    pub fn render(self) -> String {
        self.iter_names()
            .map(|(name, _)| name)
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Inverse of [`ModifierFlags::render`].
    pub fn parse(text: &str) -> Option<Self> {
        bitflags::parser::from_str(text).ok()
    }
}

#[cfg(test)]
mod tests {
    //! Keeps the textual flag form stable since it lands in every emitted record.
    use super::*;

    #[test]
    fn keywords_map_to_flags() {
        assert_eq!(ModifierFlags::from_keyword("static"), Some(ModifierFlags::STATIC));
        assert_eq!(ModifierFlags::from_keyword("readonly"), Some(ModifierFlags::READONLY));
        assert!(
            ModifierFlags::from_keyword("mutable").is_none(),
            "Unknown keywords must not silently map to an empty set"
        );
    }

    #[test]
    fn render_lists_flags_in_declaration_order() {
        let flags = ModifierFlags::READONLY | ModifierFlags::STATIC;
        assert_eq!(flags.render(), "STATIC | READONLY");
        assert_eq!(ModifierFlags::empty().render(), "", "No modifiers render as an empty string");
    }

    #[test]
    fn rendered_text_parses_back() {
        let flags = ModifierFlags::EXPORT | ModifierFlags::ABSTRACT;
        assert_eq!(
            ModifierFlags::parse(&flags.render()),
            Some(flags),
            "Rendered flags must round-trip within one run"
        );
        assert_eq!(ModifierFlags::parse(""), Some(ModifierFlags::empty()));
    }
}

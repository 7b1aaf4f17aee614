//! README metadata extraction
//!
//! Templates describe themselves with a few plain lines in their README:
//!
//! ```text
//! # Express Prisma
//! Description: JWT auth backend on Express and Prisma
//! Language: TypeScript
//! ```

/// Name, description and language parsed from a README. Missing fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub name: String,
    pub description: String,
    pub language: String,
}

const NAME_MARKER: &str = "# ";
const DESCRIPTION_PREFIX: &str = "description:";
const LANGUAGE_PREFIX: &str = "language:";

impl Metadata {
    /// Parse metadata from raw README text. Never fails; later lines win.
    pub fn parse(text: &str) -> Self {
        let mut meta = Metadata::default();

        for line in text.lines() {
            let line = line.trim();
            if let Some(rest) = strip_prefix_ignore_case(line, NAME_MARKER) {
                meta.name = rest.trim().to_string();
            } else if let Some(rest) = strip_prefix_ignore_case(line, DESCRIPTION_PREFIX) {
                meta.description = rest.trim().to_string();
            } else if let Some(rest) = strip_prefix_ignore_case(line, LANGUAGE_PREFIX) {
                meta.language = rest.trim().to_string();
            }
        }

        meta
    }
}

fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&line[prefix.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_fields() {
        let meta = Metadata::parse("# Foo\nDescription: Bar\nLanguage: Go\n");
        assert_eq!(
            meta,
            Metadata {
                name: "Foo".to_string(),
                description: "Bar".to_string(),
                language: "Go".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(Metadata::parse(""), Metadata::default());
    }

    #[test]
    fn test_later_lines_win() {
        let text = "# Foo\nlanguage: Go\nsome prose\nLANGUAGE: Rust\n";
        let meta = Metadata::parse(text);
        assert_eq!(meta.language, "Rust");
        assert_eq!(Metadata::parse(text), meta);
    }

    #[test]
    fn test_trims_whitespace_and_crlf() {
        let meta = Metadata::parse("   #   Spaced Name  \r\n\tdescription:   padded   \r\n");
        assert_eq!(meta.name, "Spaced Name");
        assert_eq!(meta.description, "padded");
        assert_eq!(meta.language, "");
    }

    #[test]
    fn test_ignores_non_matching_headings() {
        let meta = Metadata::parse("## Subheading\n#NoSpace\nLanguages: many\n");
        assert_eq!(meta, Metadata::default());
    }

    #[test]
    fn test_non_ascii_text_does_not_panic() {
        let meta = Metadata::parse("é\n# Café\ndescripción: x\n");
        assert_eq!(meta.name, "Café");
        assert_eq!(meta.description, "");
    }
}

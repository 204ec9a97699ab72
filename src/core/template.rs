//! Page templates with a single `%s` insertion point.
//!
//! `%%` stands for a literal `%`. Every other `%` sequence is rejected, as is
//! a template with zero or several `%s` placeholders. Width and flag forms
//! such as `%5s` or `%-10s` are not supported and fail as unsupported
//! directives.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("no %s placeholder found, expected exactly one")]
    MissingPlaceholder,

    #[error("found {count} %s placeholders, expected exactly one")]
    TooManyPlaceholders { count: usize },

    #[error("unsupported directive '%{directive}' at byte {offset}")]
    UnsupportedDirective { directive: char, offset: usize },

    #[error("incomplete '%' directive at end of template")]
    IncompleteDirective,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    prefix: String,
    suffix: String,
}

impl Template {
    pub fn parse(text: &str) -> Result<Self, TemplateError> {
        let mut prefix = String::with_capacity(text.len());
        let mut suffix = String::new();
        let mut placeholders = 0usize;
        let mut chars = text.char_indices();

        while let Some((offset, c)) = chars.next() {
            let literal = match c {
                '%' => match chars.next() {
                    Some((_, '%')) => '%',
                    Some((_, 's')) => {
                        placeholders += 1;
                        continue;
                    }
                    Some((_, directive)) => {
                        return Err(TemplateError::UnsupportedDirective { directive, offset })
                    }
                    None => return Err(TemplateError::IncompleteDirective),
                },
                other => other,
            };

            if placeholders == 0 {
                prefix.push(literal);
            } else {
                suffix.push(literal);
            }
        }

        match placeholders {
            0 => Err(TemplateError::MissingPlaceholder),
            1 => Ok(Self { prefix, suffix }),
            count => Err(TemplateError::TooManyPlaceholders { count }),
        }
    }

    pub fn substitute(&self, value: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + value.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(value);
        out.push_str(&self.suffix);
        out
    }
}

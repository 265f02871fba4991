//! Named-placeholder templates
//!
//! A [`Template`] is a list of literal fragments interleaved with placeholder
//! names: `fragments[i]`, then `placeholders[i]`, then `fragments[i + 1]`.
//! Templates are built once and rendered many times; rendering never mutates
//! the template.
//!
//! # Missing values
//!
//! [`Template::render`] is strict and fails with
//! [`L10nError::MissingPlaceholder`] when a name has no value.
//! [`Template::render_lossy`] substitutes the text `undefined` instead.

use crate::args::Args;
use crate::error::{L10nError, L10nResult};
use std::fmt;
use tracing::trace;

/// Text substituted for placeholders without a value by [`Template::render_lossy`]
pub const MISSING_VALUE_TEXT: &str = "undefined";

/// A reusable template of literal fragments and named placeholders
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Template {
    fragments: Vec<String>,
    placeholders: Vec<String>,
}

impl Template {
    /// Create a template from its fragments and placeholder names
    ///
    /// There must be exactly one more fragment than placeholders.
    pub fn new<F, P>(fragments: F, placeholders: P) -> L10nResult<Self>
    where
        F: IntoIterator,
        F::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let fragments: Vec<String> = fragments.into_iter().map(Into::into).collect();
        let placeholders: Vec<String> = placeholders.into_iter().map(Into::into).collect();

        if fragments.len() != placeholders.len() + 1 {
            return Err(L10nError::InvalidTemplate {
                fragments: fragments.len(),
                placeholders: placeholders.len(),
            });
        }

        Ok(Self {
            fragments,
            placeholders,
        })
    }

    /// Used by [`interpolated!`](crate::interpolated!), which guarantees the
    /// fragment count by construction.
    #[doc(hidden)]
    pub fn from_interleaved(head: &str, rest: &[(&str, &str)]) -> Self {
        let mut fragments = Vec::with_capacity(rest.len() + 1);
        let mut placeholders = Vec::with_capacity(rest.len());
        fragments.push(head.to_string());
        for (name, fragment) in rest {
            placeholders.push((*name).to_string());
            fragments.push((*fragment).to_string());
        }
        Self {
            fragments,
            placeholders,
        }
    }

    /// Parse a brace-delimited template such as `"Hello, {firstName}!"`
    ///
    /// `{{` and `}}` produce literal braces.
    pub fn parse(source: &str) -> L10nResult<Self> {
        let mut fragments = Vec::new();
        let mut placeholders = Vec::new();
        let mut current = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    current.push('{');
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    current.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        match c {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => {
                                return Err(L10nError::TemplateSyntax {
                                    position: pos,
                                    reason: "nested '{' inside placeholder".to_string(),
                                });
                            }
                            _ => name.push(c),
                        }
                    }
                    if !closed {
                        return Err(L10nError::TemplateSyntax {
                            position: pos,
                            reason: "unterminated placeholder".to_string(),
                        });
                    }
                    let name = name.trim();
                    if name.is_empty() {
                        return Err(L10nError::TemplateSyntax {
                            position: pos,
                            reason: "empty placeholder name".to_string(),
                        });
                    }
                    fragments.push(std::mem::take(&mut current));
                    placeholders.push(name.to_string());
                }
                '}' => {
                    return Err(L10nError::TemplateSyntax {
                        position: pos,
                        reason: "unmatched '}'".to_string(),
                    });
                }
                _ => current.push(c),
            }
        }
        fragments.push(current);

        trace!(
            "Parsed template with {} placeholders: {:?}",
            placeholders.len(),
            placeholders
        );

        Ok(Self {
            fragments,
            placeholders,
        })
    }

    /// Literal fragments, one more than there are placeholders
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Placeholder names in template order
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Render the template, failing on the first placeholder without a value
    pub fn render(&self, args: &Args) -> L10nResult<String> {
        self.render_with(|name| {
            args.get(name)
                .map(ToString::to_string)
                .ok_or_else(|| L10nError::MissingPlaceholder {
                    name: name.to_string(),
                })
        })
    }

    /// Render the template, writing [`MISSING_VALUE_TEXT`] for missing values
    pub fn render_lossy(&self, args: &Args) -> String {
        let rendered: Result<String, std::convert::Infallible> = self.render_with(|name| {
            Ok(args
                .get(name)
                .map_or_else(|| MISSING_VALUE_TEXT.to_string(), ToString::to_string))
        });
        match rendered {
            Ok(text) => text,
            Err(never) => match never {},
        }
    }

    fn render_with<E>(
        &self,
        mut value_of: impl FnMut(&str) -> Result<String, E>,
    ) -> Result<String, E> {
        let capacity = self.fragments.iter().map(String::len).sum::<usize>();
        let mut out = String::with_capacity(capacity + self.placeholders.len() * 8);

        out.push_str(&self.fragments[0]);
        for (name, fragment) in self.placeholders.iter().zip(&self.fragments[1..]) {
            out.push_str(&value_of(name)?);
            out.push_str(fragment);
        }
        Ok(out)
    }

    /// Turn the template into a reusable rendering function
    pub fn into_fn(self) -> impl Fn(&Args) -> L10nResult<String> + Send + Sync {
        move |args| self.render(args)
    }
}

impl fmt::Display for Template {
    /// Writes the template back out in brace syntax
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
            f.write_str(&text.replace('{', "{{").replace('}', "}}"))
        }

        escaped(f, &self.fragments[0])?;
        for (name, fragment) in self.placeholders.iter().zip(&self.fragments[1..]) {
            write!(f, "{{{name}}}")?;
            escaped(f, fragment)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Template {
    type Err = L10nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Build a rendering function from fragments and placeholder names
///
/// ```rust
/// use strbundle::{args, interpolated};
///
/// # fn example() -> Result<(), strbundle::L10nError> {
/// let hello = interpolated(["Hello, ", " ", "!"], ["firstName", "lastName"])?;
/// assert_eq!(hello(&args! { "firstName" => "John", "lastName" => "Doe" })?, "Hello, John Doe!");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub fn interpolated<F, P>(
    fragments: F,
    placeholders: P,
) -> L10nResult<impl Fn(&Args) -> L10nResult<String> + Send + Sync>
where
    F: IntoIterator,
    F::Item: Into<String>,
    P: IntoIterator,
    P::Item: Into<String>,
{
    Template::new(fragments, placeholders).map(Template::into_fn)
}

/// Build a [`Template`] from alternating fragments and placeholder names
///
/// The arguments start and end with a fragment, so the template is always
/// well formed.
///
/// ```rust
/// use strbundle::{args, interpolated};
///
/// let greet = interpolated!("Hello, ", "firstName", " ", "lastName", ", age ", "age", "!");
/// let text = greet
///     .render(&args! { "firstName" => "John", "lastName" => "Doe", "age" => 42 })
///     .unwrap();
/// assert_eq!(text, "Hello, John Doe, age 42!");
/// ```
#[macro_export]
macro_rules! interpolated {
    ($head:expr $(, $name:expr, $fragment:expr)* $(,)?) => {
        $crate::Template::from_interleaved($head, &[$(($name, $fragment)),*])
    };
}

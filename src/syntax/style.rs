//! Category → style-class mapping
//!
//! A fixed table turning each lexical category into a stable style-class
//! string. Presentation layers key their actual colors off these names; the
//! engine never deals in colors itself. The match is exhaustive over the
//! closed set, and because [`Category`] is `#[non_exhaustive]` external
//! consumers matching on it directly must keep a default arm.

use super::token::Category;

/// Stable style-class name for a category.
pub fn style_class(category: Category) -> &'static str {
    match category {
        Category::Keyword => "syntax-keyword",
        Category::String => "syntax-string",
        Category::Comment => "syntax-comment",
        Category::Number => "syntax-number",
        Category::Tag => "syntax-tag",
        Category::Punctuation => "syntax-punctuation",
        Category::Operator => "syntax-operator",
        Category::Function => "syntax-function",
        Category::Variable => "syntax-variable",
        Category::TypeAnnotation => "syntax-type",
        Category::TypeName => "syntax-type-name",
        Category::Whitespace => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Category::Keyword, "syntax-keyword")]
    #[case(Category::String, "syntax-string")]
    #[case(Category::TypeName, "syntax-type-name")]
    #[case(Category::Whitespace, "")]
    fn test_style_class(#[case] category: Category, #[case] expected: &str) {
        assert_eq!(style_class(category), expected);
    }
}

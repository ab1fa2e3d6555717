//! Board form submissions

use super::validation::{required, ValidationError};

/// A new post, all fields present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub author: String,
    pub content: String,
}

impl NewPost {
    /// # Example
    /// ```
    /// use farmboard_server::models::NewPost;
    ///
    /// assert!(NewPost::new(Some("Hello"), Some("kim"), Some("body")).is_ok());
    /// assert!(NewPost::new(Some(""), Some("kim"), Some("body")).is_err());
    /// ```
    pub fn new(
        title: Option<&str>,
        author: Option<&str>,
        content: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required("title", title)?,
            author: required("author", author)?,
            content: required("content", content)?,
        })
    }
}

/// Edited title and content of an existing post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostEdit {
    pub title: String,
    pub content: String,
}

impl PostEdit {
    pub fn new(title: Option<&str>, content: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            title: required("title", title)?,
            content: required("content", content)?,
        })
    }
}

/// A new comment on a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub author: String,
    pub content: String,
}

impl NewComment {
    pub fn new(author: Option<&str>, content: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            author: required("author", author)?,
            content: required("content", content)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_requires_every_field() {
        assert_eq!(
            NewPost::new(Some(""), Some("kim"), Some("body")).unwrap_err(),
            ValidationError::Missing { field: "title" }
        );
        assert_eq!(
            NewPost::new(Some("t"), None, Some("body")).unwrap_err(),
            ValidationError::Missing { field: "author" }
        );
        assert_eq!(
            NewPost::new(Some("t"), Some("kim"), Some("   ")).unwrap_err(),
            ValidationError::Missing { field: "content" }
        );
    }

    #[test]
    fn edit_does_not_need_author() {
        let edit = PostEdit::new(Some("new title"), Some("new body")).unwrap();
        assert_eq!(edit.title, "new title");
    }

    #[test]
    fn comment_requires_author_and_content() {
        assert!(NewComment::new(Some("lee"), Some("nice")).is_ok());
        assert!(NewComment::new(None, Some("nice")).is_err());
        assert!(NewComment::new(Some("lee"), Some("")).is_err());
    }
}

/// An image that can be shown in a grid and opened in the lightbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    /// URL of the image
    pub url: String,
    pub title: String,
    pub description: Option<String>,
}

impl GalleryImage {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// Widget image domain model
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// How rendered images are handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageEncoding {
    Raw,
    Base64,
}

impl ImageEncoding {
    pub fn from_flag(encode_base64: bool) -> Self {
        if encode_base64 { Self::Base64 } else { Self::Raw }
    }
}

/// A rendered metric widget, either PNG bytes or their base64 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetImage {
    Png(Vec<u8>),
    Base64(String),
}

impl WidgetImage {
    pub fn encode(png: Vec<u8>, encoding: ImageEncoding) -> Self {
        match encoding {
            ImageEncoding::Raw => Self::Png(png),
            ImageEncoding::Base64 => Self::Base64(STANDARD.encode(png)),
        }
    }

    pub fn to_base64(&self) -> String {
        match self {
            Self::Png(bytes) => STANDARD.encode(bytes),
            Self::Base64(text) => text.clone(),
        }
    }

    /// Size of the payload as held in memory.
    pub fn byte_len(&self) -> usize {
        match self {
            Self::Png(bytes) => bytes.len(),
            Self::Base64(text) => text.len(),
        }
    }
}

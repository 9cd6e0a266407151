use std::{io::Cursor, path::Path};

use axum::body::Bytes;
use image::{io::Reader as ImageReader, ImageFormat};
use validator::Validate;

use crate::prelude::{AppError, Result};

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_EMPTY_FILE: &str = "The submitted file is empty.";
pub const MSG_INVALID_IMAGE: &str =
    "Upload a valid image. The file you uploaded was either not an image or a corrupted image.";
pub const DESCRIPTION_MAX_CHARS: u64 = 255;
pub const FILE_NAME_MAX_CHARS: usize = 100;

/// Formats an uploaded image may be stored as, matched against its extension.
pub const ACCEPTED_FORMATS: &[ImageFormat] = &[
    ImageFormat::Bmp,
    ImageFormat::Gif,
    ImageFormat::Jpeg,
    ImageFormat::Png,
    ImageFormat::WebP,
];

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Bytes,
}

/// Raw values of the item form as they came off the wire.
#[derive(Debug, Default, Validate)]
pub struct ItemForm {
    #[validate(length(min = 1, max = 255))]
    pub description: String,
    pub image: Option<UploadedFile>,
}

/// A submission that passed every field check.
#[derive(Debug, Clone)]
pub struct ValidItem {
    pub description: String,
    pub image: UploadedFile,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors {
    pub description: Vec<String>,
    pub image: Vec<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.description.is_empty() && self.image.is_empty()
    }
}

impl ItemForm {
    pub fn new(description: &str, image: Option<UploadedFile>) -> Self {
        ItemForm {
            description: description.trim().to_string(),
            image,
        }
    }

    /// Runs the field checks. Image decoding happens on the blocking pool.
    pub async fn clean(self) -> Result<std::result::Result<ValidItem, FormErrors>> {
        let mut errors = FormErrors::default();

        if let Err(e) = self.validate() {
            if e.field_errors().contains_key("description") {
                errors.description.push(description_message(&self.description));
            }
        }

        if let Some(message) = image_message(self.image.as_ref()).await? {
            errors.image.push(message);
        }

        match (errors.is_empty(), self.image) {
            (true, Some(image)) => Ok(Ok(ValidItem {
                description: self.description,
                image,
            })),
            _ => Ok(Err(errors)),
        }
    }
}

fn description_message(value: &str) -> String {
    let count = value.chars().count();
    if count == 0 {
        MSG_REQUIRED.to_string()
    } else {
        format!(
            "Ensure this value has at most {} characters (it has {}).",
            DESCRIPTION_MAX_CHARS, count
        )
    }
}

/// The first problem with the uploaded image, if any. The name is checked
/// before the content, and the extension only once the content decodes.
async fn image_message(image: Option<&UploadedFile>) -> Result<Option<String>> {
    let file = match image {
        Some(file) if !file.file_name.is_empty() => file,
        _ => return Ok(Some(MSG_REQUIRED.to_string())),
    };

    let name_len = base_name(&file.file_name).chars().count();
    if name_len > FILE_NAME_MAX_CHARS {
        return Ok(Some(format!(
            "Ensure this filename has at most {} characters (it has {}).",
            FILE_NAME_MAX_CHARS, name_len
        )));
    }
    if file.data.is_empty() {
        return Ok(Some(MSG_EMPTY_FILE.to_string()));
    }

    let data = file.data.clone();
    let decodes = tokio::task::spawn_blocking(move || is_image(&data))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    if !decodes {
        return Ok(Some(MSG_INVALID_IMAGE.to_string()));
    }
    Ok(extension_message(&file.file_name))
}

fn base_name(file_name: &str) -> &str {
    file_name.rsplit(['/', '\\']).next().unwrap_or("")
}

fn extension_message(file_name: &str) -> Option<String> {
    let ext = Path::new(base_name(file_name))
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();
    let accepted = ImageFormat::from_extension(&ext)
        .map_or(false, |format| ACCEPTED_FORMATS.contains(&format));
    if accepted {
        return None;
    }
    let allowed: Vec<&str> = ACCEPTED_FORMATS
        .iter()
        .flat_map(|format| format.extensions_str().iter().copied())
        .collect();
    Some(format!(
        "File extension \u{201c}{}\u{201d} is not allowed. Allowed extensions are: {}.",
        ext,
        allowed.join(", ")
    ))
}

/// True when the bytes are in a recognised image format and fully decode.
pub fn is_image(data: &[u8]) -> bool {
    let reader = match ImageReader::new(Cursor::new(data)).with_guessed_format() {
        Ok(reader) => reader,
        Err(_) => return false,
    };
    if reader.format().is_none() {
        return false;
    }
    reader.decode().is_ok()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use image::{DynamicImage, ImageOutputFormat, RgbImage};

    pub(crate) fn png_bytes() -> Vec<u8> {
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(RgbImage::new(2, 2))
            .write_to(&mut Cursor::new(&mut buf), ImageOutputFormat::Png)
            .unwrap();
        buf
    }

    fn upload(name: &str, data: Vec<u8>) -> Option<UploadedFile> {
        Some(UploadedFile {
            file_name: name.to_string(),
            data: Bytes::from(data),
        })
    }

    #[tokio::test]
    async fn accepts_a_valid_submission() {
        let form = ItemForm::new("  a cat  ", upload("cat.png", png_bytes()));
        let item = form.clean().await.unwrap().unwrap();
        assert_eq!(item.description, "a cat");
        assert_eq!(item.image.file_name, "cat.png");
    }

    #[tokio::test]
    async fn boundary_length_is_accepted() {
        let form = ItemForm::new(&"é".repeat(255), upload("cat.png", png_bytes()));
        assert!(form.clean().await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn rejects_blank_and_overlong_descriptions() {
        let errors = ItemForm::new("   ", upload("cat.png", png_bytes()))
            .clean()
            .await
            .unwrap()
            .unwrap_err();
        assert_eq!(errors.description, vec![MSG_REQUIRED.to_string()]);
        assert!(errors.image.is_empty());

        let errors = ItemForm::new(&"x".repeat(256), upload("cat.png", png_bytes()))
            .clean()
            .await
            .unwrap()
            .unwrap_err();
        assert_eq!(
            errors.description,
            vec!["Ensure this value has at most 255 characters (it has 256).".to_string()]
        );
    }

    #[tokio::test]
    async fn image_problems_are_reported_per_case() {
        let missing = ItemForm::new("d", None).clean().await.unwrap().unwrap_err();
        assert_eq!(missing.image, vec![MSG_REQUIRED.to_string()]);

        let empty = ItemForm::new("d", upload("x.png", vec![]))
            .clean()
            .await
            .unwrap()
            .unwrap_err();
        assert_eq!(empty.image, vec![MSG_EMPTY_FILE.to_string()]);

        let text = ItemForm::new("d", upload("notes.png", b"hello world".to_vec()))
            .clean()
            .await
            .unwrap()
            .unwrap_err();
        assert_eq!(text.image, vec![MSG_INVALID_IMAGE.to_string()]);
        assert!(text.description.is_empty());
    }

    #[tokio::test]
    async fn image_extension_must_name_an_image_format() {
        let html = ItemForm::new("d", upload("payload.html", png_bytes()))
            .clean()
            .await
            .unwrap()
            .unwrap_err();
        assert_eq!(
            html.image,
            vec!["File extension \u{201c}html\u{201d} is not allowed. \
                  Allowed extensions are: bmp, gif, jpg, jpeg, png, webp."
                .to_string()]
        );

        let bare = ItemForm::new("d", upload("cat", png_bytes()))
            .clean()
            .await
            .unwrap()
            .unwrap_err();
        assert!(bare.image[0].starts_with("File extension \u{201c}\u{201d} is not allowed."));

        for name in ["CAT.PNG", "cat.jpeg", "dir/cat.webp"] {
            let form = ItemForm::new("d", upload(name, png_bytes()));
            assert!(form.clean().await.unwrap().is_ok(), "{}", name);
        }
    }

    #[tokio::test]
    async fn overlong_file_names_are_rejected() {
        let ok = format!("{}.png", "a".repeat(96));
        assert!(ItemForm::new("d", upload(&ok, png_bytes()))
            .clean()
            .await
            .unwrap()
            .is_ok());

        let long = format!("{}.png", "a".repeat(97));
        let errors = ItemForm::new("d", upload(&long, png_bytes()))
            .clean()
            .await
            .unwrap()
            .unwrap_err();
        assert_eq!(
            errors.image,
            vec!["Ensure this filename has at most 100 characters (it has 101).".to_string()]
        );
    }

    #[test]
    fn truncated_png_is_not_an_image() {
        let mut data = png_bytes();
        data.truncate(data.len() / 2);
        assert!(!is_image(&data));
        assert!(is_image(&png_bytes()));
    }
}

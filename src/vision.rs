use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// One part of a multimodal user message.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
pub struct VisionRequestBody {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl VisionRequestBody {
    /// A single user turn asking `prompt` about the image behind `image_url`.
    pub fn single_image(model: &str, prompt: &str, image_url: String) -> Self {
        VisionRequestBody {
            model: model.to_string(),
            messages: vec![ChatMessage {
                role: "user",
                content: vec![
                    ContentPart::Text {
                        text: prompt.to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url: image_url },
                    },
                ],
            }],
        }
    }
}

pub const VISION_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const VISION_MODEL: &str = "qwen/qwen2.5-vl-72b-instruct:free";
pub const DEFAULT_VISION_INSTRUCTIONS: &str = "What is in this image?";
pub const IMAGE_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

pub const GREETING: &str = "Hello from the image relay server!";
pub const IMAGE_FIELD: &str = "image";
pub const UPLOAD_PREFIX: &str = "uploaded_";
/// The file the relay endpoint forwards, i.e. an upload named `canvas.png`.
pub const RELAY_SOURCE_FILE: &str = "uploaded_canvas.png";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_UPLOAD_DIR: &str = ".";

pub const ENV_API_KEY: &str = "OPENROUTER_API_KEY";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_UPLOAD_DIR: &str = "UPLOAD_DIR";
pub const ENV_VISION_API_URL: &str = "VISION_API_URL";
pub const ENV_VISION_MODEL: &str = "VISION_MODEL";
pub const ENV_MAX_UPLOAD_BYTES: &str = "MAX_UPLOAD_BYTES";
pub const ENV_RELAY_TIMEOUT_SECS: &str = "RELAY_TIMEOUT_SECS";

pub const ROUTE_ROOT: &str = "/";
pub const ROUTE_IMAGE: &str = "/image";
pub const ROUTE_SEND_IMAGE: &str = "/sendImage";

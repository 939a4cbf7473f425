pub mod form_client;
pub mod ocr_client;

pub use form_client::{FormClient, FormUpdateResult};
pub use ocr_client::{TesseractClient, TextRecognizer};

// Interview handling: the parsed transcript model and the text extraction
// modes that turn it into model-ready input.

pub mod extract;
pub mod transcript;

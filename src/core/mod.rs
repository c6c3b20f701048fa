pub(crate) mod utils;

pub type Result<T> = std::result::Result<T, anyhow::Error>;

use crate::{Error, Result};

pub use partition_index_core::driver::{
    operation::{self, Operation},
    Driver, Response,
};

use url::Url;

/// Connects to the catalog named by `url`, dispatching on its scheme.
///
/// - `glue://...` requires the `glue` feature
/// - `memory://...` requires the `memory` feature
pub async fn connect(url: &str) -> Result<Box<dyn Driver>> {
    let parsed = Url::parse(url).map_err(Error::fatal)?;

    match parsed.scheme() {
        "glue" => connect_glue(url).await,
        "memory" => connect_memory(url),
        scheme => Err(crate::err!(
            "unsupported catalog; scheme={scheme}; url={url}"
        )),
    }
}

#[cfg(feature = "glue")]
async fn connect_glue(url: &str) -> Result<Box<dyn Driver>> {
    let driver = partition_index_driver_glue::Glue::connect(url).await?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "glue"))]
async fn connect_glue(_url: &str) -> Result<Box<dyn Driver>> {
    Err(crate::err!("`glue` feature not enabled"))
}

#[cfg(feature = "memory")]
fn connect_memory(url: &str) -> Result<Box<dyn Driver>> {
    let driver = partition_index_driver_memory::Memory::connect(url)?;
    Ok(Box::new(driver))
}

#[cfg(not(feature = "memory"))]
fn connect_memory(_url: &str) -> Result<Box<dyn Driver>> {
    Err(crate::err!("`memory` feature not enabled"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_scheme() {
        let err = connect("mysql://localhost").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported catalog; scheme=mysql; url=mysql://localhost"
        );
    }

    #[tokio::test]
    async fn malformed_url() {
        assert!(connect("not a url").await.is_err());
    }
}

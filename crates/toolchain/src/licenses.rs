//! License Acceptance
//!
//! Writes the fixed license-acceptance hashes `sdkmanager` checks for
//! before it will install certain packages.

use std::io;
use std::path::Path;

/// Hash accepted into `android-sdk-preview-license`.
pub const PREVIEW_LICENSE_HASH: &str = "84831b9409646a918e30573bab4c9c91346d8abd";

/// Hash accepted into `android-sdk-arm-dbt-license`; required by API 30
/// system images.
pub const ARM_DBT_LICENSE_HASH: &str = "859f317696f67ef3d7f30a50a5560e7834b43903";

pub async fn write_preview_license(sdk_home: &Path) -> io::Result<()> {
    write_license(sdk_home, "android-sdk-preview-license", PREVIEW_LICENSE_HASH).await
}

pub async fn write_arm_dbt_license(sdk_home: &Path) -> io::Result<()> {
    write_license(sdk_home, "android-sdk-arm-dbt-license", ARM_DBT_LICENSE_HASH).await
}

/// The accepted-hash file format is a blank line followed by the hash.
async fn write_license(sdk_home: &Path, name: &str, hash: &str) -> io::Result<()> {
    let licenses = sdk_home.join("licenses");
    tokio::fs::create_dir_all(&licenses).await?;
    tokio::fs::write(licenses.join(name), format!("\n{}\n", hash)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn preview_license_contains_the_pinned_hash() {
        let sdk = tempfile::tempdir().unwrap();
        write_preview_license(sdk.path()).await.unwrap();

        let contents =
            std::fs::read_to_string(sdk.path().join("licenses/android-sdk-preview-license"))
                .unwrap();
        assert_eq!(contents, format!("\n{}\n", PREVIEW_LICENSE_HASH));
    }

    #[tokio::test]
    async fn arm_dbt_license_contains_the_pinned_hash() {
        let sdk = tempfile::tempdir().unwrap();
        write_arm_dbt_license(sdk.path()).await.unwrap();

        let contents =
            std::fs::read_to_string(sdk.path().join("licenses/android-sdk-arm-dbt-license"))
                .unwrap();
        assert_eq!(contents, format!("\n{}\n", ARM_DBT_LICENSE_HASH));
    }

    #[tokio::test]
    async fn writers_create_the_licenses_directory() {
        let sdk = tempfile::tempdir().unwrap();
        assert!(!sdk.path().join("licenses").exists());
        write_preview_license(sdk.path()).await.unwrap();
        assert!(sdk.path().join("licenses").is_dir());
    }
}

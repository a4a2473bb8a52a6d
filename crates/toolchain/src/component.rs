//! SDK Components
//!
//! Package coordinates understood by `sdkmanager --install`.

/// An installable SDK package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SdkComponent {
    /// `platforms;android-<api>`
    Platform(u32),
    /// `build-tools;<version>`
    BuildTools(String),
    /// `platform-tools`
    PlatformTools,
    /// `emulator`
    Emulator,
    /// `system-images;android-<api>;<target>;<arch>`
    SystemImage {
        api_level: u32,
        target: String,
        arch: String,
    },
    /// `ndk;<version>`
    Ndk(String),
    /// `cmake;<version>`
    Cmake(String),
}

impl SdkComponent {
    /// The `sdkmanager` coordinate for this package.
    pub fn coordinate(&self) -> String {
        match self {
            SdkComponent::Platform(api) => format!("platforms;android-{}", api),
            SdkComponent::BuildTools(version) => format!("build-tools;{}", version),
            SdkComponent::PlatformTools => "platform-tools".to_string(),
            SdkComponent::Emulator => "emulator".to_string(),
            SdkComponent::SystemImage {
                api_level,
                target,
                arch,
            } => format!("system-images;android-{};{};{}", api_level, target, arch),
            SdkComponent::Ndk(version) => format!("ndk;{}", version),
            SdkComponent::Cmake(version) => format!("cmake;{}", version),
        }
    }
}

//! Platform profiles and the resolved build profile.
//!
//! A [`PlatformProfile`] is the immutable per-OS default: compiler, baseline
//! flags, library search paths, link libraries and executable suffix. The
//! [`ProjectLayout`] holds everything that is the same on every platform
//! (sources, include directories, language defaults). Both are combined
//! exactly once by [`BuildProfile::resolve`].

use std::path::PathBuf;

use super::platform::Platform;
use crate::util::config::ProfileConfig;

/// Purpose of an include directory.
///
/// Declaration order is the order in which groups appear on the command
/// line, independent of the order paths were declared in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IncludeGroup {
    /// Project-wide headers
    Project,
    /// Windowing library (GLFW)
    Windowing,
    /// Vector math library (GLM)
    VectorMath,
    /// Graphics API headers (Vulkan)
    GraphicsApi,
    /// Image loading library (stb)
    ImageLoading,
    /// Model loading library (tinyobjloader)
    ModelLoading,
}

impl IncludeGroup {
    /// All groups, in composition order.
    pub const ALL: [IncludeGroup; 6] = [
        IncludeGroup::Project,
        IncludeGroup::Windowing,
        IncludeGroup::VectorMath,
        IncludeGroup::GraphicsApi,
        IncludeGroup::ImageLoading,
        IncludeGroup::ModelLoading,
    ];
}

/// An include directory tagged with its group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludePath {
    pub group: IncludeGroup,
    pub path: PathBuf,
}

impl IncludePath {
    pub fn new(group: IncludeGroup, path: impl Into<PathBuf>) -> Self {
        IncludePath {
            group,
            path: path.into(),
        }
    }
}

/// Platform-independent description of the application being built.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    /// Executable name without platform suffix
    pub output_name: String,
    /// Translation units, in link order
    pub sources: Vec<PathBuf>,
    /// Include directories
    pub include_paths: Vec<IncludePath>,
    /// Default `-std=` flag
    pub language_standard_flag: String,
    /// Default `-stdlib=` flag; empty means toolchain default
    pub standard_library_flag: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        let sources = [
            "main.cpp",
            "vulkanGraphic.cpp",
            "swapChain.cpp",
            "MemoryPool.cpp",
            "vMemoryPool.cpp",
            "vImage.cpp",
            "vCommandPool.cpp",
            "Camera.cpp",
            "vThread.cpp",
        ];

        ProjectLayout {
            output_name: "mvp".to_string(),
            sources: sources.iter().map(PathBuf::from).collect(),
            include_paths: vec![
                IncludePath::new(IncludeGroup::Project, "../core/"),
                IncludePath::new(IncludeGroup::Windowing, "../thirdParties/glfw/include/"),
                IncludePath::new(IncludeGroup::VectorMath, "../thirdParties/"),
                IncludePath::new(IncludeGroup::GraphicsApi, "../thirdParties/vulkan/include"),
                IncludePath::new(IncludeGroup::ImageLoading, "../thirdParties/stb"),
                IncludePath::new(IncludeGroup::ModelLoading, "../thirdParties/tiny_obj_loader"),
            ],
            language_standard_flag: "-std=c++1z".to_string(),
            standard_library_flag: String::new(),
        }
    }
}

/// Immutable per-platform defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformProfile {
    pub platform: Platform,
    /// Compiler driver (also used to link)
    pub compiler: PathBuf,
    /// Platform-specific compiler flags
    pub compiler_flags: Vec<String>,
    /// Library search paths: windowing library first, then graphics API
    pub library_paths: Vec<PathBuf>,
    /// Link-library tokens, passed verbatim (e.g. `-lglfw3`)
    pub link_libraries: Vec<String>,
    /// Appended to the output name
    pub output_suffix: &'static str,
}

impl PlatformProfile {
    /// Look up the built-in profile for a platform.
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Linux => PlatformProfile {
                platform,
                compiler: PathBuf::from("clang++"),
                compiler_flags: strings(&["-g", "-D_DEBUG"]),
                library_paths: vec![
                    PathBuf::from("../thirdParties/glfw/"),
                    PathBuf::from("../thirdParties/vulkan/"),
                ],
                link_libraries: strings(&[
                    "-lglfw3",
                    "-lvulkan",
                    "-lrt",
                    "-lm",
                    "-ldl",
                    "-lXrandr",
                    "-lXinerama",
                    "-lXxf86vm",
                    "-lXcursor",
                    "-lXext",
                    "-lXrender",
                    "-lXfixes",
                    "-lX11",
                    "-lpthread",
                    "-lxcb",
                    "-lXau",
                ]),
                output_suffix: platform.exe_suffix(),
            },
            Platform::Windows => PlatformProfile {
                platform,
                compiler: PathBuf::from("clang++"),
                compiler_flags: Vec::new(),
                library_paths: vec![
                    PathBuf::from("../thirdParties/glfw/lib-vc2015/"),
                    PathBuf::from("../thirdParties/vulkan/"),
                ],
                link_libraries: strings(&["-lkernel32", "-lglfw3dll", "-luser32", "-lvulkan-1"]),
                output_suffix: platform.exe_suffix(),
            },
        }
    }

    /// Replace fields set in a config table. Lists are replaced, not appended.
    pub fn with_config(mut self, config: &ProfileConfig) -> Self {
        match config.compiler {
            Some(ref compiler) if compiler.as_os_str().is_empty() => {
                tracing::warn!("ignoring empty compiler in config");
            }
            Some(ref compiler) => self.compiler = compiler.clone(),
            None => {}
        }
        if let Some(ref flags) = config.compiler_flags {
            self.compiler_flags = flags.clone();
        }
        if let Some(ref paths) = config.library_paths {
            self.library_paths = paths.clone();
        }
        if let Some(ref libs) = config.link_libraries {
            self.link_libraries = libs.clone();
        }
        self
    }
}

/// Fully resolved build settings, ready for composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildProfile {
    pub platform: Platform,
    /// Output name with the platform suffix already applied
    pub output_name: String,
    pub source_files: Vec<PathBuf>,
    pub include_paths: Vec<IncludePath>,
    pub compiler: PathBuf,
    pub compiler_flags: Vec<String>,
    pub language_standard_flag: String,
    pub standard_library_flag: String,
    pub library_paths: Vec<PathBuf>,
    pub link_libraries: Vec<String>,
    pub should_link: bool,
    pub analyzer_flags: Vec<String>,
}

impl BuildProfile {
    /// Combine the project layout with a platform profile.
    ///
    /// This is the only place the output suffix is applied.
    pub fn resolve(layout: &ProjectLayout, platform: &PlatformProfile) -> Self {
        BuildProfile {
            platform: platform.platform,
            output_name: format!("{}{}", layout.output_name, platform.output_suffix),
            source_files: layout.sources.clone(),
            include_paths: layout.include_paths.clone(),
            compiler: platform.compiler.clone(),
            compiler_flags: platform.compiler_flags.clone(),
            language_standard_flag: layout.language_standard_flag.clone(),
            standard_library_flag: layout.standard_library_flag.clone(),
            library_paths: platform.library_paths.clone(),
            link_libraries: platform.link_libraries.clone(),
            should_link: true,
            analyzer_flags: Vec::new(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_suffix_applied_once() {
        let layout = ProjectLayout::default();

        let linux = BuildProfile::resolve(&layout, &PlatformProfile::for_platform(Platform::Linux));
        assert_eq!(linux.output_name, "mvp");

        let windows =
            BuildProfile::resolve(&layout, &PlatformProfile::for_platform(Platform::Windows));
        assert_eq!(windows.output_name, "mvp.exe");
        // Layout stays suffix-free
        assert_eq!(layout.output_name, "mvp");
    }

    #[test]
    fn test_linux_profile_defaults() {
        let profile = PlatformProfile::for_platform(Platform::Linux);
        assert_eq!(profile.compiler, PathBuf::from("clang++"));
        assert_eq!(profile.compiler_flags, vec!["-g", "-D_DEBUG"]);
        assert_eq!(profile.link_libraries.first().map(String::as_str), Some("-lglfw3"));
        assert!(profile.link_libraries.contains(&"-lX11".to_string()));
        assert!(profile.link_libraries.contains(&"-lvulkan".to_string()));
    }

    #[test]
    fn test_windows_profile_has_no_unix_libraries() {
        let profile = PlatformProfile::for_platform(Platform::Windows);
        assert!(profile.compiler_flags.is_empty());
        assert!(profile.link_libraries.contains(&"-lvulkan-1".to_string()));
        assert!(profile.link_libraries.contains(&"-lglfw3dll".to_string()));
        assert!(!profile.link_libraries.iter().any(|l| l.starts_with("-lX")));
        assert!(!profile.link_libraries.contains(&"-lpthread".to_string()));
    }

    #[test]
    fn test_resolve_defaults() {
        let profile = BuildProfile::resolve(
            &ProjectLayout::default(),
            &PlatformProfile::for_platform(Platform::Linux),
        );
        assert!(profile.should_link);
        assert!(profile.analyzer_flags.is_empty());
        assert!(profile.standard_library_flag.is_empty());
        assert_eq!(profile.language_standard_flag, "-std=c++1z");
        assert_eq!(profile.source_files.len(), 9);
    }

    #[test]
    fn test_with_config_replaces_only_set_fields() {
        let config = ProfileConfig {
            compiler: Some(PathBuf::from("/opt/llvm/bin/clang++")),
            link_libraries: Some(vec!["-lvulkan.1".to_string()]),
            ..ProfileConfig::default()
        };

        let base = PlatformProfile::for_platform(Platform::Linux);
        let profile = base.clone().with_config(&config);

        assert_eq!(profile.compiler, PathBuf::from("/opt/llvm/bin/clang++"));
        assert_eq!(profile.link_libraries, vec!["-lvulkan.1"]);
        assert_eq!(profile.compiler_flags, base.compiler_flags);
        assert_eq!(profile.library_paths, base.library_paths);
    }

    #[test]
    fn test_with_config_ignores_empty_compiler() {
        let config = ProfileConfig {
            compiler: Some(PathBuf::new()),
            compiler_flags: Some(vec!["-O2".to_string()]),
            ..ProfileConfig::default()
        };

        let profile = PlatformProfile::for_platform(Platform::Windows).with_config(&config);

        assert_eq!(profile.compiler, PathBuf::from("clang++"));
        assert_eq!(profile.compiler_flags, vec!["-O2"]);
    }

    #[test]
    fn test_include_group_order() {
        let mut sorted = IncludeGroup::ALL;
        sorted.sort();
        assert_eq!(sorted, IncludeGroup::ALL);
        assert_eq!(IncludeGroup::ALL[0], IncludeGroup::Project);
        assert_eq!(IncludeGroup::ALL[5], IncludeGroup::ModelLoading);
    }
}

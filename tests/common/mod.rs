// SPDX-License-Identifier: PMPL-1.0-or-later

//! Shared fixture: a trimmed Flutter `Runner` project descriptor.

use lproj_wire::wire::WireConfig;
use std::fs;
use std::path::{Path, PathBuf};

pub const RUNNER_PBXPROJ: &str = r#"// !$*UTF8*$!
{
	archiveVersion = 1;
	classes = {
	};
	objectVersion = 54;
	objects = {
		1498D2331E8E89220040F4C2 /* GeneratedPluginRegistrant.m in Sources */ = {isa = PBXBuildFile; fileRef = 1498D2321E8E89220040F4C2 /* GeneratedPluginRegistrant.m */; };
		3B3967161E833CAA004F5970 /* AppFrameworkInfo.plist in Resources */ = {isa = PBXBuildFile; fileRef = 3B3967151E833CAA004F5970 /* AppFrameworkInfo.plist */; };
		74858FAF1ED2DC5600515810 /* AppDelegate.swift in Sources */ = {isa = PBXBuildFile; fileRef = 74858FAE1ED2DC5600515810 /* AppDelegate.swift */; };
		97C146FC1CF9000F007C117D /* Main.storyboard in Resources */ = {isa = PBXBuildFile; fileRef = 97C146FA1CF9000F007C117D /* Main.storyboard */; };
		1498D2321E8E89220040F4C2 /* GeneratedPluginRegistrant.m */ = {isa = PBXFileReference; fileEncoding = 4; lastKnownFileType = sourcecode.c.objc; name = GeneratedPluginRegistrant.m; path = GeneratedPluginRegistrant.m; sourceTree = "<group>"; };
		3B3967151E833CAA004F5970 /* AppFrameworkInfo.plist */ = {isa = PBXFileReference; fileEncoding = 4; lastKnownFileType = text.plist.xml; name = AppFrameworkInfo.plist; path = Flutter/AppFrameworkInfo.plist; sourceTree = "<group>"; };
		74858FAE1ED2DC5600515810 /* AppDelegate.swift */ = {isa = PBXFileReference; fileEncoding = 4; lastKnownFileType = sourcecode.swift; path = AppDelegate.swift; sourceTree = "<group>"; };
		97C146EE1CF9000F007C117D /* Runner.app */ = {isa = PBXFileReference; explicitFileType = wrapper.application; includeInIndex = 0; path = Runner.app; sourceTree = BUILT_PRODUCTS_DIR; };
		97C146FA1CF9000F007C117D /* Main.storyboard */ = {isa = PBXFileReference; lastKnownFileType = file.storyboard; name = Main.storyboard; path = Runner/Base.lproj/Main.storyboard; sourceTree = "<group>"; };
		97C147021CF9000F007C117D /* Info.plist */ = {isa = PBXFileReference; lastKnownFileType = text.plist.xml; path = Info.plist; sourceTree = "<group>"; };
		97C146E51CF9000F007C117D = {isa = PBXGroup; children = (9740EEB11CF90186004384FC /* Flutter */, 97C146F01CF9000F007C117D /* Runner */, 97C146EF1CF9000F007C117D /* Products */, ); sourceTree = "<group>"; };
		9740EEB11CF90186004384FC /* Flutter */ = {isa = PBXGroup; children = (3B3967151E833CAA004F5970 /* AppFrameworkInfo.plist */, ); name = Flutter; sourceTree = "<group>"; };
		97C146EF1CF9000F007C117D /* Products */ = {isa = PBXGroup; children = (97C146EE1CF9000F007C117D /* Runner.app */, ); name = Products; sourceTree = "<group>"; };
		97C146F01CF9000F007C117D /* Runner */ = {isa = PBXGroup; children = (74858FAE1ED2DC5600515810 /* AppDelegate.swift */, 97C146FA1CF9000F007C117D /* Main.storyboard */, 97C147021CF9000F007C117D /* Info.plist */, 1498D2321E8E89220040F4C2 /* GeneratedPluginRegistrant.m */, ); path = Runner; sourceTree = "<group>"; };
		97C146EA1CF9000F007C117D /* Sources */ = {isa = PBXSourcesBuildPhase; buildActionMask = 2147483647; files = (74858FAF1ED2DC5600515810 /* AppDelegate.swift in Sources */, 1498D2331E8E89220040F4C2 /* GeneratedPluginRegistrant.m in Sources */, ); runOnlyForDeploymentPostprocessing = 0; };
		97C146EB1CF9000F007C117D /* Frameworks */ = {isa = PBXFrameworksBuildPhase; buildActionMask = 2147483647; files = (); runOnlyForDeploymentPostprocessing = 0; };
		97C146EC1CF9000F007C117D /* Resources */ = {isa = PBXResourcesBuildPhase; buildActionMask = 2147483647; files = (97C146FC1CF9000F007C117D /* Main.storyboard in Resources */, 3B3967161E833CAA004F5970 /* AppFrameworkInfo.plist in Resources */, ); runOnlyForDeploymentPostprocessing = 0; };
		97C146ED1CF9000F007C117D /* Runner */ = {isa = PBXNativeTarget; buildConfigurationList = 97C147051CF9000F007C117D /* Build configuration list for PBXNativeTarget "Runner" */; buildPhases = (97C146EA1CF9000F007C117D /* Sources */, 97C146EB1CF9000F007C117D /* Frameworks */, 97C146EC1CF9000F007C117D /* Resources */, ); buildRules = (); dependencies = (); name = Runner; productName = Runner; productReference = 97C146EE1CF9000F007C117D /* Runner.app */; productType = "com.apple.product-type.application"; };
		97C146E61CF9000F007C117D /* Project object */ = {isa = PBXProject; attributes = {LastUpgradeCheck = 1510; ORGANIZATIONNAME = ""; TargetAttributes = {97C146ED1CF9000F007C117D = {CreatedOnToolsVersion = 7.3.1; LastSwiftMigration = 1100; }; }; }; buildConfigurationList = 97C146E91CF9000F007C117D /* Build configuration list for PBXProject "Runner" */; compatibilityVersion = "Xcode 9.3"; developmentRegion = en; hasScannedForEncodings = 0; knownRegions = (en, Base, ); mainGroup = 97C146E51CF9000F007C117D; productRefGroup = 97C146EF1CF9000F007C117D /* Products */; projectDirPath = ""; projectRoot = ""; targets = (97C146ED1CF9000F007C117D /* Runner */, ); };
		97C147031CF9000F007C117D /* Debug */ = {isa = XCBuildConfiguration; buildSettings = {ASSETCATALOG_COMPILER_APPICON_NAME = AppIcon; CURRENT_PROJECT_VERSION = "$(FLUTTER_BUILD_NUMBER)"; ENABLE_BITCODE = NO; INFOPLIST_FILE = Runner/Info.plist; LD_RUNPATH_SEARCH_PATHS = ("$(inherited)", "@executable_path/Frameworks", ); PRODUCT_BUNDLE_IDENTIFIER = com.example.runner; PRODUCT_NAME = "$(TARGET_NAME)"; SWIFT_VERSION = 5.0; }; name = Debug; };
		97C147041CF9000F007C117D /* Release */ = {isa = XCBuildConfiguration; buildSettings = {ASSETCATALOG_COMPILER_APPICON_NAME = AppIcon; CURRENT_PROJECT_VERSION = "$(FLUTTER_BUILD_NUMBER)"; ENABLE_BITCODE = NO; INFOPLIST_FILE = Runner/Info.plist; PRODUCT_BUNDLE_IDENTIFIER = com.example.runner; PRODUCT_NAME = "$(TARGET_NAME)"; SWIFT_VERSION = 5.0; }; name = Release; };
		97C146E91CF9000F007C117D /* Build configuration list for PBXProject "Runner" */ = {isa = XCConfigurationList; buildConfigurations = (97C147031CF9000F007C117D /* Debug */, 97C147041CF9000F007C117D /* Release */, ); defaultConfigurationIsVisible = 0; defaultConfigurationName = Release; };
		97C147051CF9000F007C117D /* Build configuration list for PBXNativeTarget "Runner" */ = {isa = XCConfigurationList; buildConfigurations = (97C147031CF9000F007C117D /* Debug */, ); defaultConfigurationIsVisible = 0; defaultConfigurationName = Release; };
	};
	rootObject = 97C146E61CF9000F007C117D /* Project object */;
}
"#;

/// Same project, but the group that should own the variant group is
/// named `App` instead of `Runner`.
pub fn fixture_without_group() -> String {
    let replaced = RUNNER_PBXPROJ.replace("path = Runner;", "path = App;");
    assert_ne!(replaced, RUNNER_PBXPROJ);
    replaced
}

/// Same project, but the native target is named `Example`.
pub fn fixture_without_target() -> String {
    let replaced = RUNNER_PBXPROJ.replace("name = Runner;", "name = Example;");
    assert_ne!(replaced, RUNNER_PBXPROJ);
    replaced
}

/// Lays the descriptor out as `<dir>/ios/Runner.xcodeproj/project.pbxproj`
/// and returns the container path.
pub fn materialize_project(dir: &Path, contents: &str) -> PathBuf {
    let container = dir.join("ios").join("Runner.xcodeproj");
    fs::create_dir_all(&container).unwrap();
    fs::write(container.join("project.pbxproj"), contents).unwrap();
    container
}

pub fn default_config(project: PathBuf) -> WireConfig {
    WireConfig {
        project,
        ..WireConfig::default()
    }
}

pub fn read_descriptor(container: &Path) -> String {
    fs::read_to_string(container.join("project.pbxproj")).unwrap()
}

//! Static catalog of the privacy services understood by `tccutil reset`.

/// One privacy service. `command_name` is the exact token passed to the reset tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Permission {
    pub id: &'static str,
    pub display_name: &'static str,
    pub command_name: &'static str,
    pub icon: &'static str,
}

const fn permission(
    id: &'static str,
    display_name: &'static str,
    command_name: &'static str,
    icon: &'static str,
) -> Permission {
    Permission {
        id,
        display_name,
        command_name,
        icon,
    }
}

pub const ALL: Permission = permission("all", "All", "All", "✳");

pub const ACCESSIBILITY: Permission =
    permission("accessibility", "Accessibility", "Accessibility", "♿");
pub const ADDRESS_BOOK: Permission =
    permission("addressbook", "Address Book", "AddressBook", "👤");
pub const CALENDAR: Permission = permission("calendar", "Calendar", "Calendar", "📅");
pub const CAMERA: Permission = permission("camera", "Camera", "Camera", "📷");
pub const MICROPHONE: Permission = permission("microphone", "Microphone", "Microphone", "🎤");
pub const PHOTOS: Permission = permission("photos", "Photos", "Photos", "🖼");
pub const SCREEN_CAPTURE: Permission =
    permission("screencapture", "Screen Capture", "ScreenCapture", "⏺");

pub const FACEBOOK: Permission = permission("facebook", "Facebook", "Facebook", "💬");
pub const LINKEDIN: Permission = permission("linkedin", "LinkedIn", "LinkedIn", "💬");
pub const SINA_WEIBO: Permission = permission("sinaweibo", "Sina Weibo", "SinaWeibo", "💬");
pub const TENCENT_WEIBO: Permission =
    permission("tencentweibo", "Tencent Weibo", "TencentWeibo", "💬");
pub const TWITTER: Permission = permission("twitter", "Twitter", "Twitter", "🐦");

pub const ALL_FILES: Permission =
    permission("systempolicyallfiles", "All Files", "SystemPolicyAllFiles", "🗐");
pub const DESKTOP_FOLDER: Permission = permission(
    "systempolicydesktopfolder",
    "Desktop Folder",
    "SystemPolicyDesktopFolder",
    "🖥",
);
pub const DEVELOPER_FILES: Permission = permission(
    "systempolicydeveloperfiles",
    "Developer Files",
    "SystemPolicyDeveloperFiles",
    "🔨",
);
pub const DOCUMENTS_FOLDER: Permission = permission(
    "systempolicydocumentsfolder",
    "Documents Folder",
    "SystemPolicyDocumentsFolder",
    "📄",
);
pub const DOWNLOADS_FOLDER: Permission = permission(
    "systempolicydownloadsfolder",
    "Downloads Folder",
    "SystemPolicyDownloadsFolder",
    "📥",
);
pub const NETWORK_VOLUMES: Permission = permission(
    "systempolicynetworkvolumes",
    "Network Volumes",
    "SystemPolicyNetworkVolumes",
    "🖧",
);
pub const REMOVABLE_VOLUMES: Permission = permission(
    "systempolicyremovablevolumes",
    "Removable Volumes",
    "SystemPolicyRemovableVolumes",
    "💾",
);
pub const SYSADMIN_FILES: Permission = permission(
    "systempolicysysadminfiles",
    "SysAdmin Files",
    "SystemPolicySysAdminFiles",
    "🗄",
);

pub const APPLE_EVENTS: Permission =
    permission("appleevents", "Apple Events", "AppleEvents", "🍎");
pub const CONTACTS_FULL: Permission =
    permission("contactsfull", "Contacts Full", "ContactsFull", "👥");
pub const CONTACTS_LIMITED: Permission =
    permission("contactslimited", "Contacts Limited", "ContactsLimited", "👤");
pub const DEVELOPER_TOOL: Permission =
    permission("developertool", "Developer Tool", "DeveloperTool", "🔧");
pub const LISTEN_EVENT: Permission =
    permission("listenevent", "Listen Event", "ListenEvent", "⌨");
pub const LIVERPOOL: Permission = permission("liverpool", "Liverpool", "Liverpool", "⚙");
pub const LOCATION: Permission = permission("location", "Location", "Location", "📍");
pub const MEDIA_LIBRARY: Permission =
    permission("medialibrary", "Media Library", "MediaLibrary", "🎞");
pub const MOTION: Permission = permission("motion", "Motion", "Motion", "🏃");
pub const PHOTOS_ADD: Permission = permission("photosadd", "Photos Add", "PhotosAdd", "🖼");
pub const POST_EVENT: Permission = permission("postevent", "Post Event", "PostEvent", "🖱");
pub const REMINDERS: Permission = permission("reminders", "Reminders", "Reminders", "☑");
pub const SHARE_KIT: Permission = permission("sharekit", "Share Kit", "ShareKit", "📤");
pub const SIRI: Permission = permission("siri", "Siri", "Siri", "🔊");
pub const SPEECH_RECOGNITION: Permission = permission(
    "speechrecognition",
    "Speech Recognition",
    "SpeechRecognition",
    "🔊",
);
pub const UBIQUITY: Permission = permission("ubiquity", "Ubiquity", "Ubiquity", "☁");
pub const WILLOW: Permission = permission("willow", "Willow", "Willow", "⚙");

/// Permissions shown at the top level of the reset menu.
pub const COMMON: &[Permission] = &[
    ACCESSIBILITY,
    ADDRESS_BOOK,
    CALENDAR,
    CAMERA,
    MICROPHONE,
    PHOTOS,
    SCREEN_CAPTURE,
];

pub const SOCIAL: &[Permission] = &[FACEBOOK, LINKEDIN, SINA_WEIBO, TENCENT_WEIBO, TWITTER];

pub const SYSTEM_POLICY: &[Permission] = &[
    ALL_FILES,
    DESKTOP_FOLDER,
    DEVELOPER_FILES,
    DOCUMENTS_FOLDER,
    DOWNLOADS_FOLDER,
    NETWORK_VOLUMES,
    REMOVABLE_VOLUMES,
    SYSADMIN_FILES,
];

pub const OTHER: &[Permission] = &[
    APPLE_EVENTS,
    CONTACTS_FULL,
    CONTACTS_LIMITED,
    DEVELOPER_TOOL,
    LISTEN_EVENT,
    LIVERPOOL,
    LOCATION,
    MEDIA_LIBRARY,
    MOTION,
    PHOTOS_ADD,
    POST_EVENT,
    REMINDERS,
    SHARE_KIT,
    SIRI,
    SPEECH_RECOGNITION,
    UBIQUITY,
    WILLOW,
];

/// Named submenus of the reset menu, in display order.
pub const GROUPS: &[(&str, &[Permission])] = &[
    ("Social", SOCIAL),
    ("System Policy", SYSTEM_POLICY),
    ("Other", OTHER),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn catalog() -> impl Iterator<Item = &'static Permission> {
        std::iter::once(&ALL)
            .chain(COMMON)
            .chain(SOCIAL)
            .chain(SYSTEM_POLICY)
            .chain(OTHER)
    }

    fn by_id(id: &str) -> Option<&'static Permission> {
        catalog().find(|p| p.id == id)
    }

    const TOOL_TOKENS: [&str; 38] = [
        "All",
        "Accessibility",
        "AddressBook",
        "AppleEvents",
        "Calendar",
        "Camera",
        "ContactsFull",
        "ContactsLimited",
        "DeveloperTool",
        "Facebook",
        "LinkedIn",
        "ListenEvent",
        "Liverpool",
        "Location",
        "MediaLibrary",
        "Microphone",
        "Motion",
        "Photos",
        "PhotosAdd",
        "PostEvent",
        "Reminders",
        "ScreenCapture",
        "ShareKit",
        "SinaWeibo",
        "Siri",
        "SpeechRecognition",
        "SystemPolicyAllFiles",
        "SystemPolicyDesktopFolder",
        "SystemPolicyDeveloperFiles",
        "SystemPolicyDocumentsFolder",
        "SystemPolicyDownloadsFolder",
        "SystemPolicyNetworkVolumes",
        "SystemPolicyRemovableVolumes",
        "SystemPolicySysAdminFiles",
        "TencentWeibo",
        "Twitter",
        "Ubiquity",
        "Willow",
    ];

    #[test]
    fn test_catalog_matches_tool_tokens() {
        let tokens: HashSet<&str> = catalog().map(|p| p.command_name).collect();
        let expected: HashSet<&str> = TOOL_TOKENS.into_iter().collect();
        assert_eq!(tokens, expected);
        assert_eq!(catalog().count(), TOOL_TOKENS.len());
    }

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<&str> = catalog().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog().count());
    }

    #[test]
    fn test_groups_do_not_overlap() {
        let mut seen = HashSet::new();
        for p in COMMON.iter().chain(SOCIAL).chain(SYSTEM_POLICY).chain(OTHER) {
            assert!(seen.insert(p.id), "{} listed twice", p.id);
        }
        assert!(!seen.contains(ALL.id));
    }

    #[test]
    fn test_lookup() {
        let p = by_id("screencapture").unwrap();
        assert_eq!(p.display_name, "Screen Capture");
        assert_eq!(p.command_name, "ScreenCapture");
        assert_eq!(by_id("systempolicysysadminfiles").unwrap().display_name, "SysAdmin Files");
        assert!(by_id("nope").is_none());
    }
}

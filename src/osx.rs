//! macOS-specific utilities: NSWorkspace process enumeration and app icons.

#[cfg(target_os = "macos")]
use cocoa::base::id;

use crate::types::RunningApp;
#[cfg(target_os = "macos")]
use crate::types::ActivationPolicy;

/// NSBitmapImageFileTypePNG
#[cfg(target_os = "macos")]
const PNG_FILE_TYPE: u64 = 4;

/// Copy an NSString into an owned String; nil maps to None.
#[cfg(target_os = "macos")]
unsafe fn string_from_ns(ns: id) -> Option<String> {
    use cocoa::foundation::NSString;

    if ns.is_null() {
        return None;
    }
    let cstr = unsafe { NSString::UTF8String(ns) };
    if cstr.is_null() {
        return None;
    }
    Some(
        unsafe { std::ffi::CStr::from_ptr(cstr) }
            .to_string_lossy()
            .into_owned(),
    )
}

/// Snapshot of `NSWorkspace.sharedWorkspace.runningApplications`.
#[cfg(target_os = "macos")]
pub fn running_applications() -> Vec<RunningApp> {
    use cocoa::base::nil;
    use cocoa::foundation::{NSArray, NSAutoreleasePool};
    use objc::{class, msg_send, sel, sel_impl};

    unsafe {
        let pool = NSAutoreleasePool::new(nil);

        let workspace: id = msg_send![class!(NSWorkspace), sharedWorkspace];
        let running_apps: id = msg_send![workspace, runningApplications];
        let count = if running_apps.is_null() {
            0
        } else {
            NSArray::count(running_apps)
        };

        let mut res = Vec::with_capacity(count as usize);
        for i in 0..count {
            let app: id = running_apps.objectAtIndex(i);
            let pid: i32 = msg_send![app, processIdentifier];
            let policy: isize = msg_send![app, activationPolicy];
            let localized_name: id = msg_send![app, localizedName];
            let bundle_identifier: id = msg_send![app, bundleIdentifier];
            res.push(RunningApp {
                pid,
                name: string_from_ns(localized_name),
                bundle_id: string_from_ns(bundle_identifier),
                activation_policy: ActivationPolicy::from_raw(policy),
            });
        }

        pool.drain();
        res
    }
}

#[cfg(not(target_os = "macos"))]
#[allow(dead_code)]
pub fn running_applications() -> Vec<RunningApp> {
    Vec::new()
}

/// PNG bytes of the icon of the running application with this pid.
#[cfg(target_os = "macos")]
pub fn app_icon_png(pid: i32) -> Option<Vec<u8>> {
    use cocoa::base::nil;
    use cocoa::foundation::NSAutoreleasePool;
    use objc::{class, msg_send, sel, sel_impl};

    unsafe {
        let pool = NSAutoreleasePool::new(nil);

        let result = (|| {
            let app: id = msg_send![
                class!(NSRunningApplication),
                runningApplicationWithProcessIdentifier: pid
            ];
            if app.is_null() {
                return None;
            }

            let icon: id = msg_send![app, icon];
            if icon.is_null() {
                return None;
            }

            let tiff_data: id = msg_send![icon, TIFFRepresentation];
            if tiff_data.is_null() {
                return None;
            }

            let bitmap_rep: id = msg_send![class!(NSBitmapImageRep), imageRepWithData: tiff_data];
            if bitmap_rep.is_null() {
                return None;
            }

            let png_data: id = msg_send![
                bitmap_rep,
                representationUsingType: PNG_FILE_TYPE
                properties: nil
            ];
            if png_data.is_null() {
                return None;
            }

            let length: usize = msg_send![png_data, length];
            let bytes: *const u8 = msg_send![png_data, bytes];
            if bytes.is_null() || length == 0 {
                return None;
            }
            Some(std::slice::from_raw_parts(bytes, length).to_vec())
        })();

        pool.drain();
        result
    }
}

#[cfg(not(target_os = "macos"))]
pub fn app_icon_png(_pid: i32) -> Option<Vec<u8>> {
    None
}

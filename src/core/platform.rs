//! Owner and group resolution behind a small platform interface.
//!
//! [Platform] is the seam between the entry reader and the operating system's
//! user/group databases. [Native] is the implementation for the host: on unix
//! it reads uid/gid from the metadata and looks the names up in the user and
//! group databases through `uzers`, everywhere else it reports nothing and
//! every owner renders as [UNKNOWN].

use std::fs::Metadata;

/// Display name used when an owner or group cannot be resolved.
pub const UNKNOWN: &str = "unknown";

pub trait Platform {
    /// Numeric (uid, gid) of the entry, if the platform has that concept.
    fn owner_ids(&self, meta: &Metadata) -> Option<(u32, u32)>;

    fn user_name(&self, uid: u32) -> Option<String>;

    fn group_name(&self, gid: u32) -> Option<String>;

    /// Resolves the owner and group display names for an entry.
    /// Any lookup failure yields [UNKNOWN] for that half.
    fn owner_and_group(&self, meta: &Metadata) -> (String, String) {
        let Some((uid, gid)) = self.owner_ids(meta) else {
            return (UNKNOWN.to_string(), UNKNOWN.to_string());
        };
        let owner = self.user_name(uid).unwrap_or_else(|| {
            tracing::debug!(uid, "no user entry for uid");
            UNKNOWN.to_string()
        });
        let group = self.group_name(gid).unwrap_or_else(|| {
            tracing::debug!(gid, "no group entry for gid");
            UNKNOWN.to_string()
        });
        (owner, group)
    }
}

/// The host platform.
#[derive(Debug, Default, Clone, Copy)]
pub struct Native;

#[cfg(unix)]
impl Platform for Native {
    fn owner_ids(&self, meta: &Metadata) -> Option<(u32, u32)> {
        use std::os::unix::fs::MetadataExt;
        Some((meta.uid(), meta.gid()))
    }

    fn user_name(&self, uid: u32) -> Option<String> {
        uzers::get_user_by_uid(uid).map(|u| u.name().to_string_lossy().into_owned())
    }

    fn group_name(&self, gid: u32) -> Option<String> {
        uzers::get_group_by_gid(gid).map(|g| g.name().to_string_lossy().into_owned())
    }
}

#[cfg(not(unix))]
impl Platform for Native {
    fn owner_ids(&self, _meta: &Metadata) -> Option<(u32, u32)> {
        None
    }

    fn user_name(&self, _uid: u32) -> Option<String> {
        None
    }

    fn group_name(&self, _gid: u32) -> Option<String> {
        None
    }
}

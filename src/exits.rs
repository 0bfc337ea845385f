//! Exit codes and process setup.

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const USAGE: i32 = 2;

/// Keep secrets out of core dumps and away from ptrace by same-uid peers.
/// Call this early in main().
#[cfg(target_os = "linux")]
pub fn harden() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn harden() {}

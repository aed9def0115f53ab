//! Exit statuses and termination signal handling.

pub const SUCCESS: i32 = 0;
/// Generation-time failure: random source, empty candidates, stdout.
pub const FAILURE: i32 = 1;
pub const INVALID_CONFIG: i32 = 128;
pub const INTERRUPTED: i32 = 130;

/// Signal handler for SIGINT/SIGTERM/SIGHUP - leave immediately, nothing to flush
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::_exit(INTERRUPTED) }
}

/// Install termination signal handlers.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep password material out of core dumps and away from ptrace peers.
#[cfg(target_os = "linux")]
pub fn harden() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
pub fn harden() {}

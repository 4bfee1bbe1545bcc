//! `fork` + `waitpid` round trip with a fixed child exit status.

use std::io;

use crate::outcome::{ProbeFailure, ProbeOutcome, check};

pub const CHILD_EXIT_STATUS: i32 = 42;

/// Fork; the child `_exit`s with 42 and the parent reaps it.
pub fn check_process_control() -> ProbeOutcome {
    // SAFETY: the child branch only calls `_exit`, which is async-signal-safe,
    // so forking from a process that has (or had) other threads is sound.
    let pid = unsafe { libc::fork() };
    check(pid >= 0, ProbeFailure::Fork)?;

    if pid == 0 {
        // Child: skip destructors, atexit handlers and stdio flushing.
        // SAFETY: `_exit` never returns and touches no parent state.
        unsafe { libc::_exit(CHILD_EXIT_STATUS) };
    }

    let status = wait_for(pid).map_err(|_| ProbeFailure::Waitpid)?;
    judge_status(status)
}

/// Accept only a normal exit with [`CHILD_EXIT_STATUS`].
pub fn judge_status(status: libc::c_int) -> ProbeOutcome {
    check(libc::WIFEXITED(status), ProbeFailure::ChildAbnormalExit)?;
    check(
        libc::WEXITSTATUS(status) == CHILD_EXIT_STATUS,
        ProbeFailure::ChildExitStatus,
    )
}

/// Block until `pid` changes state, retrying on `EINTR`.
fn wait_for(pid: libc::pid_t) -> io::Result<libc::c_int> {
    let mut status: libc::c_int = 0;
    loop {
        // SAFETY: `status` is a valid, writable `c_int` for the call's duration.
        let rc = unsafe { libc::waitpid(pid, &mut status, 0) };
        if rc >= 0 {
            return Ok(status);
        }
        let err = io::Error::last_os_error();
        if err.raw_os_error() != Some(libc::EINTR) {
            return Err(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fork a child that runs `child` (which must not return) and reap it.
    fn status_of(child: fn() -> !) -> libc::c_int {
        // SAFETY: the child only calls async-signal-safe functions.
        let pid = unsafe { libc::fork() };
        assert!(pid >= 0, "fork failed");
        if pid == 0 {
            child();
        }
        wait_for(pid).expect("waitpid")
    }

    fn exit_42() -> ! {
        // SAFETY: `_exit` never returns.
        unsafe { libc::_exit(42) }
    }

    fn exit_7() -> ! {
        // SAFETY: `_exit` never returns.
        unsafe { libc::_exit(7) }
    }

    fn killed() -> ! {
        // SAFETY: SIGKILL cannot be caught, so the child dies here.
        unsafe {
            libc::kill(libc::getpid(), libc::SIGKILL);
            libc::_exit(0)
        }
    }

    #[test]
    fn exit_42_is_accepted() {
        assert_eq!(judge_status(status_of(exit_42)), Ok(()));
    }

    #[test]
    fn wrong_exit_status_is_reported() {
        assert_eq!(
            judge_status(status_of(exit_7)),
            Err(ProbeFailure::ChildExitStatus)
        );
    }

    #[test]
    fn signal_death_is_abnormal_exit() {
        let status = status_of(killed);
        assert!(libc::WIFSIGNALED(status));
        assert_eq!(libc::WTERMSIG(status), libc::SIGKILL);
        assert_eq!(judge_status(status), Err(ProbeFailure::ChildAbnormalExit));
    }
}

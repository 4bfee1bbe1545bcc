//! Override the `SIGUSR1` disposition, then deliver it to ourselves.

use crate::outcome::{ProbeFailure, ProbeOutcome, check};

/// Install `SIG_IGN` for `SIGUSR1` (empty mask, no flags) and `raise` it.
///
/// The default disposition terminates the process, so the override must be in
/// place before the raise. It is left installed afterwards.
pub fn check_signals() -> ProbeOutcome {
    ignore_sigusr1()?;

    // SAFETY: raising a signal whose disposition is SIG_IGN has no side effects.
    let rc = unsafe { libc::raise(libc::SIGUSR1) };
    check(rc == 0, ProbeFailure::Raise)?;
    Ok(())
}

fn ignore_sigusr1() -> ProbeOutcome {
    // SAFETY: a zeroed `sigaction` is a valid starting value; every field the
    // kernel reads is set below before the call.
    let mut action = unsafe { std::mem::zeroed::<libc::sigaction>() };
    action.sa_sigaction = libc::SIG_IGN;
    action.sa_flags = 0;
    // SAFETY: `sa_mask` is a valid, writable `sigset_t`.
    let rc = unsafe { libc::sigemptyset(&mut action.sa_mask) };
    check(rc == 0, ProbeFailure::Sigaction)?;

    // SAFETY: `action` is fully initialised; the old action is not requested.
    let rc = unsafe { libc::sigaction(libc::SIGUSR1, &action, std::ptr::null_mut()) };
    check(rc == 0, ProbeFailure::Sigaction)?;
    Ok(())
}

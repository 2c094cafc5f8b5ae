//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.

use std::env;
use std::ffi::OsStr;
use std::path::Path;

use crate::error::Error;


#[cfg(any(target_os = "macos", target_os = "ios"))]
extern {
    fn gettimeofday(tp: *mut libc::timeval, tzp: *mut libc::timezone) -> libc::c_int;
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(any(target_os = "macos", target_os = "ios"))]
pub(crate) fn sys_time() -> Result<(i64, i32), Error> {
    use std::ptr::null_mut;

    let mut tv = libc::timeval { tv_sec: 0, tv_usec: 0 };
    let result = unsafe { gettimeofday(&mut tv, null_mut()) };
    if result != 0 {
        return Err(clock_failure());
    }

    trace!("gettimeofday returned {}s/{}us", tv.tv_sec, tv.tv_usec);
    Ok((i64::from(tv.tv_sec), tv.tv_usec as i32 * 1000))
}

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(all(unix, not(target_os = "macos"), not(target_os = "ios")))]
pub(crate) fn sys_time() -> Result<(i64, i32), Error> {
    let mut ts = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    let result = unsafe { libc::clock_gettime(libc::CLOCK_REALTIME, &mut ts) };
    if result != 0 {
        return Err(clock_failure());
    }

    trace!("clock_gettime returned {}s/{}ns", ts.tv_sec, ts.tv_nsec);
    Ok((i64::from(ts.tv_sec), i64::from(ts.tv_nsec) as i32))
}

#[cfg(windows)] use winapi::shared::minwindef::FILETIME;
#[cfg(windows)] const HECTONANOSECS_IN_SEC: i64 = 10_000_000;
#[cfg(windows)] const HECTONANOSEC_TO_UNIX_EPOCH: i64 = 11_644_473_600 * HECTONANOSECS_IN_SEC;

/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the nanosecond of the second.
#[cfg(windows)]
pub(crate) fn sys_time() -> Result<(i64, i32), Error> {
    use winapi::um::sysinfoapi::GetSystemTimeAsFileTime;

    let mut ft = FILETIME { dwLowDateTime: 0, dwHighDateTime: 0 };
    unsafe { GetSystemTimeAsFileTime(&mut ft) };

    let t = (((ft.dwHighDateTime as u64) << 32) | (ft.dwLowDateTime as u64)) as i64 - HECTONANOSEC_TO_UNIX_EPOCH;
    Ok((t.div_euclid(HECTONANOSECS_IN_SEC), (t.rem_euclid(HECTONANOSECS_IN_SEC) * 100) as i32))
}

/// Returns the system’s current time on platforms without a dedicated
/// implementation, using the standard library’s clock.
#[cfg(not(any(unix, windows)))]
pub(crate) fn sys_time() -> Result<(i64, i32), Error> {
    use std::time::{SystemTime, UNIX_EPOCH};

    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d)   => Ok((d.as_secs() as i64, d.subsec_nanos() as i32)),
        Err(e)  => {
            let d = e.duration();
            let nanos = i64::from(d.subsec_nanos());
            Ok((-(d.as_secs() as i64) - if nanos > 0 { 1 } else { 0 },
                if nanos > 0 { (1_000_000_000 - nanos) as i32 } else { 0 }))
        },
    }
}

#[cfg(unix)]
fn clock_failure() -> Error {
    let error = std::io::Error::last_os_error();
    warn!("failed to read the system clock: {}", error);
    Error::SystemClock(error.to_string())
}


/// Returns the offset from UTC, in seconds, that the host’s local time
/// zone has at the given instant.
#[cfg(any(target_os = "linux", target_os = "android", target_os = "macos", target_os = "ios",
          target_os = "freebsd", target_os = "netbsd", target_os = "openbsd", target_os = "dragonfly"))]
pub(crate) fn sys_local_offset(epoch_second: i64) -> Result<i64, Error> {
    use std::convert::TryFrom;

    let time = libc::time_t::try_from(epoch_second)
        .map_err(|_| Error::Overflow("local offset lookup"))?;

    let mut tm: libc::tm = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::localtime_r(&time, &mut tm) };
    if result.is_null() {
        return Err(clock_failure());
    }

    Ok(i64::from(tm.tm_gmtoff))
}

/// Platforms without `tm_gmtoff` fall back to UTC.
#[cfg(not(any(target_os = "linux", target_os = "android", target_os = "macos", target_os = "ios",
              target_os = "freebsd", target_os = "netbsd", target_os = "openbsd", target_os = "dragonfly")))]
pub(crate) fn sys_local_offset(_epoch_second: i64) -> Result<i64, Error> {
    warn!("local time zone offsets are unavailable on this platform; using UTC");
    Ok(0)
}


/// Attempts to determine the system’s current time zone. There’s no
/// guaranteed way to do this, so this function returns `None` if no
/// timezone could be found.
///
/// The `TZ` environment variable takes priority, followed by the name of
/// the zoneinfo file that `/etc/localtime` links to.
pub fn sys_timezone() -> Option<String> {
    if let Ok(tz) = env::var("TZ") {
        let tz = tz.trim_start_matches(':');
        if !tz.is_empty() {
            debug!("using time zone {:?} from the TZ environment variable", tz);
            return Some(tz.to_string());
        }
    }

    let link = std::fs::read_link("/etc/localtime").ok()?;
    match extract_timezone(&link) {
        Some(ref tz) if !tz.is_empty()  => {
            debug!("using time zone {:?} from /etc/localtime", tz);
            Some(tz.clone())
        },
        _                               => None,
    }
}

/// Given a path, returns whether a valid zoneinfo timezone name can be
/// detected at the end of that path.
fn extract_timezone(path: &Path) -> Option<String> {
    let mut bits = Vec::new();

    for pathlet in path.iter().rev().take_while(|c| is_tz_component(c)) {
        bits.insert(0, pathlet.to_str()?);
    }

    Some(bits.join("/"))
}

/// Returns whether the input string could be used as a component of a
/// zoneinfo timezone name, which in this case is whether its first
/// character is a capital letter.
fn is_tz_component(component: &OsStr) -> bool {
    component.to_str()
             .and_then(|s| s.chars().next())
             .map_or(false, char::is_uppercase)
}

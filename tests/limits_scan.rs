//! Marker detection in security limits files.
//!
//! These exercise the pure line scanner against in-memory fixtures, without
//! touching the filesystem.

use labstream_setup::LimitsStatus;

const MARKER: &str = "@labstream";

#[test]
fn detects_memlock_grant() {
    let lines = [
        "# /etc/security/limits.conf",
        "@labstream - memlock unlimited",
    ];
    let status = LimitsStatus::scan(lines, MARKER);
    assert!(status.memlock);
    assert!(!status.rtprio);
    assert!(!status.configured());
}

#[test]
fn detects_rtprio_grant() {
    let status = LimitsStatus::scan(["@labstream - rtprio 50"], MARKER);
    assert!(status.rtprio);
    assert!(!status.memlock);
}

#[test]
fn both_grants_make_configured() {
    let lines = [
        "* soft core 0",
        "@labstream - memlock unlimited",
        "@audio - rtprio 95",
        "@labstream - rtprio 50",
    ];
    assert!(LimitsStatus::scan(lines, MARKER).configured());
}

#[test]
fn memlock_requires_every_token() {
    // Removing any one of the four required substrings must defeat detection.
    let variants = [
        "labstream - memlock unlimited",  // group marker gone
        "@labstream = memlock unlimited", // no hyphen
        "@labstream - memlock 65536",     // not unlimited
        "@labstream - msgqueue unlimited", // keyword gone
    ];
    for line in variants {
        let status = LimitsStatus::scan([line], MARKER);
        assert!(!status.memlock, "false positive on {line:?}");
    }
}

#[test]
fn rtprio_requires_every_token() {
    let variants = [
        "@video - rtprio 50",       // group marker gone
        "@labstream rtprio 50",     // no hyphen
        "@labstream - rtprio 99",   // wrong value
        "@labstream - nice 50",     // keyword gone
    ];
    for line in variants {
        let status = LimitsStatus::scan([line], MARKER);
        assert!(!status.rtprio, "false positive on {line:?}");
    }
}

#[test]
fn hyphen_anywhere_in_line_counts() {
    // Loose substring containment is intentional; a hyphen embedded in
    // another word still satisfies the check.
    let status = LimitsStatus::scan(["@labstream hard-limit memlock unlimited"], MARKER);
    assert!(status.memlock);
}

#[test]
fn empty_file_is_unconfigured() {
    let lines: [&str; 0] = [];
    let status = LimitsStatus::scan(lines, MARKER);
    assert!(!status.memlock);
    assert!(!status.rtprio);
    assert!(!status.configured());
}

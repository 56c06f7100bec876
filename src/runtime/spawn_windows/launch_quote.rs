//! Windows Argument Quoting Rules
//! 
//! Unfortunately, there currently is no crate that supplies this logic, and
//! the Rust standard library has these as crate private.  Therefore, there's
//! no choice (at the moment) than to implement this tricky logic here.
//! 
//! See "Everyone quotes command line arguments the wrong way":
//!   https://learn.microsoft.com/en-us/archive/blogs/twistylittlepassagesallalike/everyone-quotes-command-line-arguments-the-wrong-way
//! and
//!   https://docs.microsoft.com/en-us/archive/blogs/larryosterman/the-windows-command-line-is-just-a-string
//! 
//! Note that this also must include the command name that is traditionally
//! passed as arg 0.

use std::{ffi::{OsStr, OsString}, fmt::Display, os::windows::ffi::OsStrExt};

/// An argument (or the program name) contained a NUL character, which
/// would silently truncate the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteriorNul;

impl Display for InteriorNul {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("nul character found in the command line")
    }
}

/// Quote the command and arguments into the argument parameter to the launch function.
pub fn quote_arguments(cmd: &OsStr, args: &[OsString]) -> Result<Vec<u16>, InteriorNul> {
    let mut ret = vec![];
    append_arg(&mut ret, cmd)?;
    for arg in args {
        ret.push(' ' as u16);
        append_arg(&mut ret, arg)?;
    }
    ret.push(0); // NUL terminator
    Ok(ret)
}


fn append_arg(cmd: &mut Vec<u16>, arg: &OsStr) -> Result<(), InteriorNul> {
    let arg = enforce_no_zero(arg)?;
    if !requires_quoting(arg) {
        let arg: Vec<u16> = arg.encode_wide().collect();
        cmd.extend_from_slice(arg.as_slice());
        return Ok(());
    }

    // Perform quoting.
    cmd.push('"' as u16);
    let mut backslash_count = 0;
    for c in arg.encode_wide() {
        if c == '\\' as u16 {
            backslash_count += 1;
            continue;
        }
        if c == '"' as u16 {
            // Escape all the backslashes, and add one for the escaped '"'.
            for _ in 0..(backslash_count * 2 + 1) {
                cmd.push('\\' as u16);
            }
            cmd.push(c);
        } else {
            // Backslashes aren't special.
            for _ in 0..backslash_count {
                cmd.push('\\' as u16);
            }
            cmd.push(c);
        }
        backslash_count = 0;
    }

    // Escape all the trailing backslashes.
    // Let the final '"' be still considered a meta-character.
    for _ in 0..(backslash_count * 2) {
        cmd.push('\\' as u16);
    }

    cmd.push('"' as u16);
    Ok(())
}


fn enforce_no_zero(val: &OsStr) -> Result<&OsStr, InteriorNul> {
    if val.encode_wide().any(|b| b == 0) {
        Err(InteriorNul)
    } else {
        Ok(val)
    }
}

fn requires_quoting(val: &OsStr) -> bool {
    val.is_empty() || 
    val.encode_wide().any(char_requires_quoting)
}

fn char_requires_quoting(b: u16) -> bool {
    b == ' ' as u16
    || b == '\t' as u16
    || b == '\n' as u16
    || b == 0x0bu16  // vertical tab (\v in c)
    || b == '"' as u16
}

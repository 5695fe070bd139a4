// Copyright 2025 the Floaty Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a button cannot be shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayError {
    /// The system-wide overlay permission has not been granted.
    ///
    /// The caller has to request it again before retrying; there is no
    /// automatic retry.
    PermissionDenied,
    /// The host could not attach the button surface (for example, the
    /// activity has no content view yet).
    AttachFailed,
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PermissionDenied => f.write_str("overlay permission not granted"),
            Self::AttachFailed => f.write_str("overlay host could not attach the button"),
        }
    }
}

impl core::error::Error for OverlayError {}

// SPDX-License-Identifier: MIT

bitflags::bitflags! {
    /// MINIX `i_mode` field: file type in the high nibble, permissions below.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MinixMode: u16 {
        // File type
        const SOCKET  = 0o140000;
        const SYMLINK = 0o120000;
        const REGULAR = 0o100000;
        const BLOCK   = 0o060000;
        const DIR     = 0o040000;
        const CHARDEV = 0o020000;
        const FIFO    = 0o010000;

        // Special bits
        const SETUID  = 0o004000;
        const SETGID  = 0o002000;
        const STICKY  = 0o001000;

        // Owner permissions
        const OWNER_R = 0o400;
        const OWNER_W = 0o200;
        const OWNER_X = 0o100;

        // Group permissions
        const GROUP_R = 0o040;
        const GROUP_W = 0o020;
        const GROUP_X = 0o010;

        // Others permissions
        const OTHER_R = 0o004;
        const OTHER_W = 0o002;
        const OTHER_X = 0o001;
    }
}

impl MinixMode {
    pub const TYPE_MASK: u16 = 0o170000;

    /// Keeps unknown bits so the raw mode survives a round trip.
    #[inline]
    pub fn from_raw(mode: u16) -> Self {
        Self::from_bits_retain(mode)
    }

    #[inline]
    pub fn file_type(&self) -> u16 {
        self.bits() & Self::TYPE_MASK
    }

    /// Exact directory type; what the walker and resolver require.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.file_type() == Self::DIR.bits()
    }

    /// Whether the `DIR` bit is set at all. Block devices carry it too.
    #[inline]
    pub fn has_dir_bit(&self) -> bool {
        self.contains(Self::DIR)
    }

    #[inline]
    pub fn is_regular(&self) -> bool {
        self.file_type() == Self::REGULAR.bits()
    }

    /// Ten-character `ls`-style string: `d` or `-`, then rwx for owner, group, other.
    pub fn permission_string(&self) -> String {
        const BITS: [(MinixMode, char); 9] = [
            (MinixMode::OWNER_R, 'r'),
            (MinixMode::OWNER_W, 'w'),
            (MinixMode::OWNER_X, 'x'),
            (MinixMode::GROUP_R, 'r'),
            (MinixMode::GROUP_W, 'w'),
            (MinixMode::GROUP_X, 'x'),
            (MinixMode::OTHER_R, 'r'),
            (MinixMode::OTHER_W, 'w'),
            (MinixMode::OTHER_X, 'x'),
        ];

        let mut out = String::with_capacity(10);
        out.push(if self.has_dir_bit() { 'd' } else { '-' });
        for (flag, ch) in BITS {
            out.push(if self.contains(flag) { ch } else { '-' });
        }
        out
    }
}

//! Per-document reading session and its binary record.
//!
//! Frame indices are stored in canonical word space (no synthesized splits),
//! so a record stays meaningful across runs that hyphenate differently.

use alloc::vec::Vec;

use heapless::Vec as HeaplessVec;

use crate::pager::MAX_WINDOW_LINES;

const SESSION_MAGIC: [u8; 4] = *b"GLS1";
const SESSION_VERSION: u8 = 1;
const FLAG_GEOMETRY: u8 = 0x01;
const HEADER_LEN: usize = 34;
const FRAME_LEN: usize = 12;
const CHECKSUM_LEN: usize = 4;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionError {
    Truncated,
    BadMagic,
    UnsupportedVersion(u8),
    Corrupted,
}

/// Host window placement, opaque to the engine.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FrameRecord {
    pub begin: u32,
    pub end: u32,
    pub highlight: Option<u32>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionState {
    pub font_size: u16,
    pub wpm: u16,
    pub current_line: u16,
    pub budget: u32,
    pub geometry: Option<WindowGeometry>,
    pub frames: HeaplessVec<FrameRecord, MAX_WINDOW_LINES>,
}

impl SessionState {
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.frames.len() * FRAME_LEN + CHECKSUM_LEN
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        let geometry = self.geometry.unwrap_or_default();

        buf.extend_from_slice(&SESSION_MAGIC);
        buf.push(SESSION_VERSION);
        buf.push(if self.geometry.is_some() {
            FLAG_GEOMETRY
        } else {
            0
        });
        buf.extend_from_slice(&self.font_size.to_le_bytes());
        buf.extend_from_slice(&self.wpm.to_le_bytes());
        buf.extend_from_slice(&self.current_line.to_le_bytes());
        buf.extend_from_slice(&self.budget.to_le_bytes());
        buf.extend_from_slice(&geometry.x.to_le_bytes());
        buf.extend_from_slice(&geometry.y.to_le_bytes());
        buf.extend_from_slice(&geometry.width.to_le_bytes());
        buf.extend_from_slice(&geometry.height.to_le_bytes());
        buf.extend_from_slice(&(self.frames.len() as u16).to_le_bytes());

        for frame in &self.frames {
            buf.extend_from_slice(&frame.begin.to_le_bytes());
            buf.extend_from_slice(&frame.end.to_le_bytes());
            let highlight = frame.highlight.map_or(0, |offset| offset.saturating_add(1));
            buf.extend_from_slice(&highlight.to_le_bytes());
        }

        let checksum = checksum32(&buf);
        buf.extend_from_slice(&checksum.to_le_bytes());
        buf
    }

    /// Parses a record. Records written by a newer format version yield
    /// `Ok(None)`.
    pub fn decode(buf: &[u8]) -> Result<Option<Self>, SessionError> {
        if buf.len() < SESSION_MAGIC.len() + 1 {
            return Err(SessionError::Truncated);
        }
        if buf[..4] != SESSION_MAGIC {
            return Err(SessionError::BadMagic);
        }

        match buf[4] {
            SESSION_VERSION => {}
            0 => return Err(SessionError::UnsupportedVersion(0)),
            _ => return Ok(None),
        }

        if buf.len() < HEADER_LEN + CHECKSUM_LEN {
            return Err(SessionError::Truncated);
        }

        let frame_count = read_u16(buf, 32) as usize;
        let body_len = HEADER_LEN + frame_count * FRAME_LEN;
        if buf.len() < body_len + CHECKSUM_LEN {
            return Err(SessionError::Truncated);
        }

        let expected_checksum = read_u32(buf, body_len);
        if checksum32(&buf[..body_len]) != expected_checksum {
            return Err(SessionError::Corrupted);
        }
        if frame_count > MAX_WINDOW_LINES {
            return Err(SessionError::Corrupted);
        }

        let flags = buf[5];
        let geometry = ((flags & FLAG_GEOMETRY) != 0).then(|| WindowGeometry {
            x: read_u32(buf, 16) as i32,
            y: read_u32(buf, 20) as i32,
            width: read_u32(buf, 24),
            height: read_u32(buf, 28),
        });

        let mut frames = HeaplessVec::new();
        for index in 0..frame_count {
            let at = HEADER_LEN + index * FRAME_LEN;
            let highlight = read_u32(buf, at + 8);
            let frame = FrameRecord {
                begin: read_u32(buf, at),
                end: read_u32(buf, at + 4),
                highlight: highlight.checked_sub(1),
            };
            if frame.begin > frame.end {
                return Err(SessionError::Corrupted);
            }
            frames
                .push(frame)
                .map_err(|_| SessionError::Corrupted)?;
        }

        Ok(Some(Self {
            font_size: read_u16(buf, 6),
            wpm: read_u16(buf, 8),
            current_line: read_u16(buf, 10),
            budget: read_u32(buf, 12),
            geometry,
            frames,
        }))
    }
}

/// Per-document session persistence backend.
pub trait SessionStore {
    type Error;

    fn load(&mut self, document_key: &str) -> Result<Option<SessionState>, Self::Error>;
    fn save(&mut self, document_key: &str, state: &SessionState) -> Result<(), Self::Error>;
}

/// FNV-1a over `bytes`.
pub fn checksum32(bytes: &[u8]) -> u32 {
    let mut hash = 0x811C_9DC5u32;
    for byte in bytes {
        hash ^= *byte as u32;
        hash = hash.wrapping_mul(16_777_619);
    }
    hash
}

fn read_u16(buf: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([buf[at], buf[at + 1]])
}

fn read_u32(buf: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}

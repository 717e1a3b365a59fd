//! Audio formats: MPEG audio, AIFF and the Ogg codecs.

use crate::common::binary::{has_prefix_at, read_u16_be};

/// Ogg page capture pattern.
pub const OGG_MAGIC: &[u8] = b"OggS";

/// Frame sync masks: MPEG-1, MPEG-2 and MPEG-2.5 Layer III (protection bit ignored).
const MP3_FRAME_SYNCS: [u16; 3] = [0xFFFA, 0xFFF2, 0xFFE2];

/// MP3: an ID3v2 tag or a Layer III frame header.
pub fn mp3(prefix: &[u8]) -> bool {
    if has_prefix_at(prefix, 0, b"ID3") {
        return true;
    }
    read_u16_be(prefix, 0).is_some_and(|word| MP3_FRAME_SYNCS.contains(&(word & 0xFFFE)))
}

/// AIFF and AIFF-C.
pub fn aiff(prefix: &[u8]) -> bool {
    has_prefix_at(prefix, 0, b"FORM")
        && (has_prefix_at(prefix, 8, b"AIFF") || has_prefix_at(prefix, 8, b"AIFC"))
}

pub fn ogg(prefix: &[u8]) -> bool {
    has_prefix_at(prefix, 0, OGG_MAGIC)
}

/// Codec identification packet of the first logical stream.
fn ogg_codec(prefix: &[u8], codecs: &[&[u8]]) -> bool {
    ogg(prefix) && codecs.iter().any(|codec| has_prefix_at(prefix, 28, codec))
}

/// Ogg carrying FLAC, Vorbis, Opus or Speex.
pub fn ogg_audio(prefix: &[u8]) -> bool {
    ogg_codec(
        prefix,
        &[b"\x7fFLAC", b"\x01vorbis", b"OpusHead", b"Speex   "],
    )
}

/// Ogg carrying Theora, a skeleton or a generic video stream.
pub fn ogg_video(prefix: &[u8]) -> bool {
    ogg_codec(
        prefix,
        &[b"\x80theora", b"fishead\x00", b"\x01video\x00\x00\x00"],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mp3_tag_and_frame() {
        assert!(mp3(b"ID3\x04\x00\x00\x00\x00\x00\x00"));
        // MPEG-1 Layer III, with and without CRC protection.
        assert!(mp3(&[0xFF, 0xFB, 0x90, 0x64]));
        assert!(mp3(&[0xFF, 0xFA, 0x90, 0x64]));
        // MPEG-2 and MPEG-2.5.
        assert!(mp3(&[0xFF, 0xF3, 0x40, 0xC0]));
        assert!(mp3(&[0xFF, 0xE3, 0x40, 0xC0]));
        // ADTS AAC shares the sync but not the layer bits.
        assert!(!mp3(&[0xFF, 0xF1, 0x50, 0x80]));
        assert!(!mp3(&[0xFF]));
    }

    #[test]
    fn test_ogg_codecs() {
        let mut page = OGG_MAGIC.to_vec();
        page.extend_from_slice(&[0u8; 24]);
        let mut vorbis = page.clone();
        vorbis.extend_from_slice(b"\x01vorbis\x00\x00\x00\x00");
        assert!(ogg_audio(&vorbis));
        assert!(!ogg_video(&vorbis));

        let mut theora = page.clone();
        theora.extend_from_slice(b"\x80theora\x03\x02");
        assert!(ogg_video(&theora));
        assert!(ogg(&theora));

        assert!(!ogg_audio(&page));
    }

    #[test]
    fn test_aiff() {
        assert!(aiff(b"FORM\x00\x00\x10\x00AIFFCOMM"));
        assert!(aiff(b"FORM\x00\x00\x10\x00AIFCFVER"));
        assert!(!aiff(b"FORM\x00\x00\x10\x00DJVU"));
    }
}

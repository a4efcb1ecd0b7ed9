use crate::{
    refs::{ObjectReferences, RefType},
    PDFError, Pt,
};
use id_arena::Id;
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// A parsed TrueType / OpenType font. Fonts are embedded in their entirety in the
/// generated PDF and addressed by glyph id (Identity-H encoding), so any
/// character the face covers (accents, ñ, ¿, ¡, º) prints without re-encoding.
///
/// Fonts are stored in the [`Document`](crate::Document) and referred to by their
/// [`Id`] from spans.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, returning an error if the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font { face })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face().units_per_em() as f32
    }

    fn name_entry(&self, id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The full name of the font, if the face carries one
    pub fn name(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FULL_NAME)
    }

    /// The family name of the font, if the face carries one
    pub fn family(&self) -> Option<String> {
        self.name_entry(owned_ttf_parser::name_id::FAMILY)
    }

    /// Distance from the baseline to the top of the font at the given size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face().ascender() as f32
    }

    /// Distance from the baseline to the bottom of the font at the given size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face().descender() as f32
    }

    /// The font's natural line height at the given size (ascent - descent + line gap)
    pub fn line_height(&self, size: Pt) -> Pt {
        let leading = self.scaling(size) * self.face().line_gap() as f32;
        leading + self.ascent(size) - self.descent(size)
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face().glyph_index(ch).map(|i| i.0)
    }

    /// Glyph used to print `ch`: the glyph itself, else U+FFFD, else `?`, else
    /// the `.notdef` glyph
    pub fn glyph_or_fallback(&self, ch: char) -> u16 {
        self.glyph_id(ch)
            .or_else(|| self.glyph_id('\u{FFFD}'))
            .or_else(|| self.glyph_id('?'))
            .unwrap_or(0)
    }

    /// Width of `text` at the given size. Every character is measured with the
    /// glyph it will actually be printed with.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let scaling = self.scaling(size);
        text.chars()
            .map(|ch| {
                let advance = self
                    .face()
                    .glyph_hor_advance(GlyphId(self.glyph_or_fallback(ch)))
                    .unwrap_or_default();
                scaling * advance as f32
            })
            .sum()
    }

    /// Map of glyph id to the first unicode character that maps onto it
    fn glyph_chars(&self) -> BTreeMap<u16, char> {
        let mut map = BTreeMap::new();
        let Some(cmap) = self.face().tables().cmap else {
            return map;
        };

        for subtable in cmap.subtables.into_iter().filter(|t| t.is_unicode()) {
            subtable.codepoints(|codepoint| {
                let Ok(ch) = char::try_from(codepoint) else {
                    return;
                };
                if let Some(gid) = subtable.glyph_index(codepoint).filter(|g| g.0 > 0) {
                    map.entry(gid.0).or_insert(ch);
                }
            });
        }

        map
    }

    fn units_to_pdf(&self, units: f32) -> f32 {
        units * 1000.0 / self.face().units_per_em() as f32
    }

    fn write_font_data(&self, refs: &mut ObjectReferences, index: usize, writer: &mut Pdf) -> Ref {
        let id = refs.gen(RefType::FontData(index));
        let data = self.face.as_slice();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            data,
            miniz_oxide::deflate::CompressionLevel::DefaultLevel as u8,
        );

        let mut stream = writer.stream(id, compressed.as_slice());
        stream.filter(Filter::FlateDecode);
        stream.pair(Name(b"Length1"), data.len() as i32);
        id
    }

    fn write_descriptor(&self, refs: &mut ObjectReferences, index: usize, writer: &mut Pdf) -> Ref {
        let data_id = self.write_font_data(refs, index, writer);
        let face = self.face();

        let glyph_bbox = face.global_bounding_box();
        let max_advance = (0..face.number_of_glyphs())
            .filter_map(|g| face.glyph_hor_advance(GlyphId(g)))
            .max()
            .unwrap_or_default();

        let mut flags = FontFlags::NON_SYMBOLIC;
        if face.is_monospaced() {
            flags.insert(FontFlags::FIXED_PITCH);
        }
        if face.is_italic() {
            flags.insert(FontFlags::ITALIC);
        }

        let base_name = self.name().unwrap_or_else(|| format!("F{index}"));
        let id = refs.gen(RefType::FontDescriptor(index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(base_name.as_bytes()));
        if let Some(family) = self.family() {
            descriptor.family(Str(family.as_bytes()));
        }
        descriptor.flags(flags);
        descriptor.bbox(pdf_writer::Rect {
            x1: self.units_to_pdf(glyph_bbox.x_min as f32),
            y1: self.units_to_pdf(glyph_bbox.y_min as f32),
            x2: self.units_to_pdf(glyph_bbox.x_max as f32),
            y2: self.units_to_pdf(glyph_bbox.y_max as f32),
        });
        // upright faces only; italics get a nominal slant
        descriptor.italic_angle(if face.is_italic() { -12.0 } else { 0.0 });
        descriptor.ascent(self.units_to_pdf(face.ascender() as f32));
        descriptor.descent(self.units_to_pdf(face.descender() as f32));
        descriptor.cap_height(
            face.capital_height()
                .map(|h| self.units_to_pdf(h as f32))
                .unwrap_or_else(|| self.units_to_pdf(face.ascender() as f32)),
        );
        descriptor.stem_v(80.0);
        descriptor.max_width(self.units_to_pdf(max_advance as f32));
        descriptor.font_file2(data_id);
        descriptor.finish();

        id
    }

    fn write_cid(&self, refs: &mut ObjectReferences, index: usize, writer: &mut Pdf) -> Ref {
        let descriptor_id = self.write_descriptor(refs, index, writer);
        let face = self.face();

        let advances: Vec<f32> = (0..face.number_of_glyphs())
            .map(|g| {
                let advance = face.glyph_hor_advance(GlyphId(g)).unwrap_or_default();
                self.units_to_pdf(advance as f32)
            })
            .collect();

        let id = refs.gen(RefType::CidFont(index));
        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(format!("F{index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);
        cid_font.default_width(0.0);
        cid_font.widths().consecutive(0, advances);
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        cid_font.finish();

        id
    }

    fn write_to_unicode(&self, refs: &mut ObjectReferences, index: usize, writer: &mut Pdf) -> Ref {
        let id = refs.gen(RefType::ToUnicode(index));

        let mut cmap = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n<0000> <FFFF>\nendcodespacerange\n",
        );

        // bfchar blocks hold at most 100 entries
        let glyphs: Vec<(u16, char)> = self.glyph_chars().into_iter().collect();
        for block in glyphs.chunks(100) {
            let _ = writeln!(cmap, "{} beginbfchar", block.len());
            for (gid, ch) in block {
                let mut units = [0u16; 2];
                let _ = write!(cmap, "<{gid:04x}> <");
                for unit in ch.encode_utf16(&mut units) {
                    let _ = write!(cmap, "{unit:04x}");
                }
                cmap.push_str(">\n");
            }
            cmap.push_str("endbfchar\n");
        }
        cmap.push_str("endcmap\nCMapName currentdict /CMap defineresource pop\nend\nend\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            cmap.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultLevel as u8,
        );
        writer
            .stream(id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        id
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let index = id.index();
        let font_id = refs.gen(RefType::Font(index));
        let cid_font_id = self.write_cid(refs, index, writer);
        let to_unicode_id = self.write_to_unicode(refs, index, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(format!("F{index}").as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
    }
}

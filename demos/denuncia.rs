//! Render a denuncia from a JSON file.
//!
//! ```text
//! cargo run --example denuncia -- denuncia.json Regular.ttf Bold.ttf denuncia.pdf [estilo.toml]
//! ```
//!
//! The JSON file holds the issuing precinct and the complaint:
//!
//! ```text
//! { "precinct": { "institution": "...", "name": "...", "city": "...", "logo": "escudo.png" },
//!   "denuncia": { "number": "...", "date": "2024-03-05", "complainant": { ... }, ... } }
//! ```

use acta_pdf::compose::{Logo, TypefaceIds, Typefaces};
use acta_pdf::records::{self, Denuncia, Precinct};
use acta_pdf::{documents, Document, DocumentStyle, Font, Image, PDFError};
use serde::Deserialize;

#[derive(Deserialize)]
struct Input {
    precinct: Precinct,
    denuncia: Denuncia,
}

fn main() -> Result<(), PDFError> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 4 {
        eprintln!("usage: denuncia <record.json> <regular.ttf> <bold.ttf> <out.pdf> [style.toml]");
        std::process::exit(2);
    }

    let input: Input = records::from_json(&std::fs::read_to_string(&args[0])?)?;
    let style = match args.get(4) {
        Some(path) => DocumentStyle::load(path)?,
        None => DocumentStyle::default(),
    };

    let mut doc = Document::default();
    let ids = TypefaceIds {
        regular: doc.add_font(Font::load(std::fs::read(&args[1])?)?),
        bold: doc.add_font(Font::load(std::fs::read(&args[2])?)?),
    };
    let logo = input
        .precinct
        .logo
        .as_ref()
        .and_then(Image::load_or_skip)
        .map(|image| {
            let aspect_ratio = image.aspect_ratio();
            Logo {
                id: doc.add_image(image),
                aspect_ratio,
            }
        });

    let composed = {
        let typefaces = Typefaces::new(&doc, ids)?;
        documents::denuncia(&input.denuncia, &input.precinct, logo, &style, &typefaces)?
    };
    composed.render_into(&mut doc, &ids)?;

    let out = std::fs::File::create(&args[3])?;
    doc.write(std::io::BufWriter::new(out))?;
    log::info!("denuncia {} written to {}", input.denuncia.number, args[3]);
    Ok(())
}

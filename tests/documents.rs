use acta_pdf::compose::{FontSet, Mark, MonospaceMetrics, TypefaceIds, Typefaces};
use acta_pdf::records::{self, CertificateRequest, CustodyReceipt, Denuncia, Precinct};
use acta_pdf::{documents, Document, DocumentStyle, Font, Mm};

const PRECINCT: &str = r#"{
    "institution": "Policía Nacional",
    "name": "Comisaría Tercera",
    "address": "Av. Pellegrini 1200",
    "phone": "4455-1020",
    "city": "Rosario"
}"#;

const DENUNCIA: &str = r#"{
    "number": "1234/2024",
    "date": "2024-03-05",
    "time": "14:30",
    "complainant": {
        "name": "Ana Gómez",
        "id_number": "30111222",
        "nationality": "argentina",
        "age": 34,
        "address": "Mitre 455"
    },
    "offense": "Hurto",
    "incident_date": "2024-03-04",
    "incident_place": "Parada de colectivo de calle Corrientes y Santa Fe",
    "narrative": "Que el día de ayer, siendo aproximadamente las 19 horas, mientras esperaba el colectivo, una persona de sexo masculino le sustrajo la billetera del bolsillo de su campera.\nQue dentro de la billetera se encontraban su documento de identidad, dos tarjetas de débito y la suma de quince mil pesos.",
    "officer": { "name": "Luis Pérez", "rank": "Sargento", "badge": "4512" }
}"#;

const CERTIFICADO: &str = r#"{
    "number": "77/2024",
    "issued_on": "2024-04-02",
    "denuncia_number": "1234/2024",
    "denuncia_date": "2024-03-05",
    "complainant": { "name": "Ana Gómez", "id_number": "30111222" },
    "offense": "Hurto",
    "addressee": "Compañía de Seguros del Sur",
    "officer": { "name": "Marta Ríos", "rank": "Oficial" }
}"#;

const CUSTODIA: &str = r#"{
    "number": "C-031/2024",
    "date": "2024-06-18",
    "asset": { "kind": "Motocicleta", "brand": "Honda", "plate": "A123BCD" },
    "delivered_by": { "name": "Jorge Díaz" },
    "received_by": { "name": "Marta Ríos", "rank": "Oficial" }
}"#;

fn document_with_fonts() -> (Document, TypefaceIds) {
    let mut doc = Document::default();
    let ids = TypefaceIds {
        regular: doc.add_font(
            Font::load(include_bytes!("../assets/DejaVuSans.ttf").to_vec()).expect("can load font"),
        ),
        bold: doc.add_font(
            Font::load(include_bytes!("../assets/DejaVuSans-Bold.ttf").to_vec())
                .expect("can load font"),
        ),
    };
    (doc, ids)
}

fn precinct() -> Precinct {
    records::from_json(PRECINCT).expect("valid precinct")
}

/// Text marks that belong to the body, i.e. neither letterhead nor footer
fn body_marks_within_column<F: FontSet>(marks: &[Mark], fonts: &F, style: &DocumentStyle) -> bool {
    let left = style.margins.left;
    let right = style.page_size().0 - style.margins.right;
    marks.iter().all(|mark| match mark {
        Mark::Text {
            text, x, y, style: text_style, ..
        } if *y >= style.margins.top => {
            *x >= left && *x + fonts.measure(*text_style, text) <= right + Mm(1e-3)
        }
        _ => true,
    })
}

#[test]
fn denuncia_renders_to_pdf() {
    let (mut doc, ids) = document_with_fonts();
    let denuncia: Denuncia = records::from_json(DENUNCIA).expect("valid denuncia");
    let style = DocumentStyle::default();

    let composed = {
        let typefaces = Typefaces::new(&doc, ids).expect("fonts are in the document");
        let composed = documents::denuncia(&denuncia, &precinct(), None, &style, &typefaces)
            .expect("composes");
        for page in composed.pages.iter() {
            assert!(body_marks_within_column(&page.marks, &typefaces, &style));
        }
        composed
    };
    let text = composed.text();
    assert!(text.contains("Av. Pellegrini 1200 - Tel. 4455-1020"));
    assert!(text.contains("Fecha del hecho: 04/03/2024"));
    assert!(text.contains("Sargento Luis Pérez Funcionario actuante - Placa N° 4512"));

    composed.render_into(&mut doc, &ids).expect("renders");
    assert_eq!(doc.page_count(), composed.page_count());

    let mut out = Vec::new();
    doc.write(&mut out).expect("writes");
    assert!(out.starts_with(b"%PDF-"));
    let pdf = String::from_utf8_lossy(&out);
    assert!(pdf.contains(&format!("/Count {}", composed.page_count())));
    assert!(pdf.contains("/FontFile2"));
}

#[test]
fn certificado_and_custodia_compose_with_real_fonts() {
    let (doc, ids) = document_with_fonts();
    let typefaces = Typefaces::new(&doc, ids).expect("fonts are in the document");
    let style = DocumentStyle::default();

    let request: CertificateRequest = records::from_json(CERTIFICADO).expect("valid request");
    let certificate =
        documents::certificado(&request, &precinct(), None, &style, &typefaces).expect("composes");
    assert_eq!(certificate.page_count(), 1);
    assert!(certificate.text().contains("Destinatario: Compañía de Seguros del Sur"));

    let receipt: CustodyReceipt = records::from_json(CUSTODIA).expect("valid receipt");
    let custody =
        documents::custodia(&receipt, &precinct(), None, &style, &typefaces).expect("composes");
    assert!(custody.text().contains("Modelo: No especificado"));
    for page in custody.pages.iter() {
        assert!(body_marks_within_column(&page.marks, &typefaces, &style));
    }
}

#[test]
fn oficio_style_changes_the_sheet() {
    let style = DocumentStyle::from_toml_str("paper = \"oficio\"").expect("valid style");
    let metrics = MonospaceMetrics::default();
    let denuncia: Denuncia = records::from_json(DENUNCIA).expect("valid denuncia");
    let composed =
        documents::denuncia(&denuncia, &precinct(), None, &style, &metrics).expect("composes");
    assert_eq!(composed.size, (Mm(216.0), Mm(340.0)));

    let footer_y = composed.pages[0]
        .marks
        .iter()
        .rev()
        .find_map(|m| match m {
            Mark::Text { y, .. } => Some(*y),
            _ => None,
        })
        .expect("footer");
    assert_eq!(footer_y, Mm(330.0));
}

#[test]
fn long_complaints_flow_over_several_pages() {
    let metrics = MonospaceMetrics::default();
    let style = DocumentStyle::default();
    let mut denuncia: Denuncia = records::from_json(DENUNCIA).expect("valid denuncia");
    denuncia.narrative = (0..20).map(|_| lipsum::lipsum(60)).collect::<Vec<_>>().join("\n");

    let composed =
        documents::denuncia(&denuncia, &precinct(), None, &style, &metrics).expect("composes");
    assert!(composed.page_count() >= 3);

    let geometry = style.flow_geometry();
    for page in composed.pages.iter() {
        for mark in page.marks.iter() {
            if let Mark::Text { y, .. } = mark {
                // letterhead above the body, footer below it, body in between
                let in_header = *y < geometry.top;
                let in_footer = *y > geometry.bottom;
                let in_body = *y >= geometry.top && *y + style.line_height <= geometry.bottom + Mm(1e-3);
                assert!(in_header || in_footer || in_body, "mark at {y} mm");
            }
        }
    }
}

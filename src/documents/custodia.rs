use super::{composer, info, officer_signature, opening};
use crate::compose::{ComposedDocument, FontSet, Logo, Signature};
use crate::config::DocumentStyle;
use crate::error::PDFError;
use crate::records::{or_not_specified, short_date, CustodyReceipt, Precinct};

const CLOSING: &str = "El bien descripto queda bajo resguardo de esta dependencia hasta que la \
    autoridad competente disponga su restitución. Leída la presente, los intervinientes la \
    ratifican y firman de conformidad.";

/// Receipt for a vehicle or other asset taken into custody
pub fn custodia<F: FontSet + ?Sized>(
    receipt: &CustodyReceipt,
    precinct: &Precinct,
    logo: Option<Logo>,
    style: &DocumentStyle,
    fonts: &F,
) -> Result<ComposedDocument, PDFError> {
    log::debug!("composing acta de custodia {}", receipt.number);
    let mut composer = composer(precinct, logo, style, fonts)?;

    let related = receipt
        .denuncia_number
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(|n| format!(", relacionado con la denuncia N° {n}"))
        .unwrap_or_default();
    let intake = format!(
        "{}, se labra la presente acta a fin de dejar constancia de que {} hace entrega en \
         custodia a esta dependencia, {}, del bien que se describe a continuación{related}.",
        opening(precinct, receipt.date, receipt.time.as_deref()),
        receipt.delivered_by.introduction(),
        or_not_specified(Some(precinct.name.as_str())),
    );

    composer
        .title(&format!("ACTA DE ENTREGA EN CUSTODIA N° {}", receipt.number))?
        .field("Fecha", &short_date(receipt.date))?
        .field("Hora", receipt.time())?
        .spacer(style.paragraph_spacing)
        .paragraph(&intake)?
        .heading("DESCRIPCIÓN DEL BIEN")?;
    for (label, value) in receipt.asset.fields() {
        composer.field(label, &value)?;
    }
    composer
        .spacer(style.paragraph_spacing)
        .heading("OBSERVACIONES")?
        .paragraph(receipt.observations())?
        .paragraph(CLOSING)?
        .spacer(style.line_height)
        .signatures(&[
            Signature::new(receipt.delivered_by.name(), "Entrega"),
            officer_signature(&receipt.received_by, "Recibe"),
        ])?;

    Ok(composer.finish(info(
        format!("Acta de custodia N° {}", receipt.number),
        precinct,
        or_not_specified(Some(receipt.asset.kind.as_str())),
        &["custodia", receipt.number.as_str()],
    )))
}

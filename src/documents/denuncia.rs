use super::{composer, info, officer_signature, opening};
use crate::compose::{ComposedDocument, FontSet, Logo, Signature};
use crate::config::DocumentStyle;
use crate::error::PDFError;
use crate::records::{or_not_specified, short_date, Denuncia, Precinct};

const CLOSING: &str = "No siendo para más, se da por finalizado el acto, previa lectura y \
    ratificación de su contenido por parte del compareciente, quien firma al pie de la \
    presente para constancia, por ante el funcionario actuante que certifica.";

/// The formal complaint: who appeared, what is being reported, the
/// complainant's own account, and both signatures
pub fn denuncia<F: FontSet + ?Sized>(
    record: &Denuncia,
    precinct: &Precinct,
    logo: Option<Logo>,
    style: &DocumentStyle,
    fonts: &F,
) -> Result<ComposedDocument, PDFError> {
    log::debug!("composing denuncia {}", record.number);
    let mut composer = composer(precinct, logo, style, fonts)?;

    let unit = or_not_specified(Some(precinct.name.as_str()));
    let appearance = format!(
        "{}, se presenta ante esta dependencia, {unit}, {}, quien manifiesta que desea \
         formular denuncia por el delito de {}, y en tal sentido expone:",
        opening(precinct, record.date, record.time.as_deref()),
        record.complainant.introduction(),
        record.offense(),
    );

    composer
        .title(&format!("DENUNCIA N° {}", record.number))?
        .field("Fecha de la denuncia", &short_date(record.date))?
        .field("Hora", record.time())?
        .spacer(style.paragraph_spacing)
        .paragraph(&appearance)?
        .heading("DATOS DEL HECHO")?
        .field("Delito", record.offense())?
        .field("Fecha del hecho", &record.incident_date())?
        .field("Hora del hecho", record.incident_time())?
        .field("Lugar del hecho", record.incident_place())?
        .spacer(style.paragraph_spacing)
        .heading("RELATO DE LOS HECHOS")?
        .paragraph(or_not_specified(Some(record.narrative.as_str())))?
        .paragraph(CLOSING)?
        .spacer(style.line_height)
        .signatures(&[
            Signature::new(record.complainant.name(), "Denunciante"),
            officer_signature(&record.officer, "Funcionario actuante"),
        ])?;

    Ok(composer.finish(info(
        format!("Denuncia N° {}", record.number),
        precinct,
        record.offense(),
        &["denuncia", record.number.as_str()],
    )))
}

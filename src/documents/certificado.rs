use super::{composer, info, officer_signature};
use crate::compose::{ComposedDocument, FontSet, Logo};
use crate::config::DocumentStyle;
use crate::error::PDFError;
use crate::records::{long_date, or_not_specified, short_date, CertificateRequest, Precinct};

/// Certifies that a complaint was filed, for presentation to another authority
pub fn certificado<F: FontSet + ?Sized>(
    request: &CertificateRequest,
    precinct: &Precinct,
    logo: Option<Logo>,
    style: &DocumentStyle,
    fonts: &F,
) -> Result<ComposedDocument, PDFError> {
    log::debug!("composing certificado {}", request.number);
    let mut composer = composer(precinct, logo, style, fonts)?;

    let unit = or_not_specified(Some(precinct.name.as_str()));
    let certifies = format!(
        "El que suscribe, {}, en su carácter de funcionario de {unit}, CERTIFICA que en esta \
         dependencia se encuentra registrada la denuncia N° {}, formulada en fecha {} por {}, \
         documento de identidad N° {}, por el delito de {}.",
        request.officer.title(),
        request.denuncia_number,
        short_date(request.denuncia_date),
        request.complainant.name(),
        request.complainant.id_number(),
        or_not_specified(Some(request.offense.as_str())),
    );
    let issued_for = match request.purpose() {
        Some(purpose) => format!(
            "Se extiende el presente a solicitud de la parte interesada, para ser presentado \
             ante {}, a los fines de {purpose}.",
            request.addressee()
        ),
        None => format!(
            "Se extiende el presente a solicitud de la parte interesada, para ser presentado \
             ante {}.",
            request.addressee()
        ),
    };
    let dated = format!(
        "Dado en la ciudad de {}, {}.",
        precinct.city(),
        long_date(request.issued_on)
    );

    composer
        .title("CERTIFICADO DE DENUNCIA")?
        .field("Certificado N°", &request.number)?
        .field("Fecha de emisión", &short_date(request.issued_on))?
        .field("Destinatario", request.addressee())?
        .spacer(style.paragraph_spacing)
        .paragraph(&certifies)?
        .paragraph(&issued_for)?
        .paragraph(&dated)?
        .spacer(style.line_height * 2.0)
        .signatures(&[officer_signature(&request.officer, "Funcionario certificante")])?;

    Ok(composer.finish(info(
        format!("Certificado N° {}", request.number),
        precinct,
        "Certificado de denuncia",
        &[
            "certificado",
            request.number.as_str(),
            request.denuncia_number.as_str(),
        ],
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::{Mark, MonospaceMetrics};
    use crate::records::{Officer, Person};
    use chrono::NaiveDate;

    fn request(purpose: Option<&str>) -> CertificateRequest {
        CertificateRequest {
            number: "77/2024".into(),
            issued_on: NaiveDate::from_ymd_opt(2024, 4, 2).expect("valid date"),
            denuncia_number: "1234/2024".into(),
            denuncia_date: NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date"),
            complainant: Person {
                name: "Ana Gómez".into(),
                ..Person::default()
            },
            offense: "Hurto".into(),
            addressee: Some("Compañía de Seguros del Sur".into()),
            purpose: purpose.map(String::from),
            officer: Officer {
                name: "Marta Ríos".into(),
                rank: Some("Oficial".into()),
                badge: Some("881".into()),
            },
        }
    }

    fn precinct() -> Precinct {
        Precinct {
            name: "Comisaría Tercera".into(),
            city: "Rosario".into(),
            ..Precinct::default()
        }
    }

    #[test]
    fn certificate_names_the_complaint() {
        let metrics = MonospaceMetrics::default();
        let doc = certificado(
            &request(Some("tramitar el cobro del siniestro")),
            &precinct(),
            None,
            &DocumentStyle::default(),
            &metrics,
        )
        .expect("composes");

        assert_eq!(doc.page_count(), 1);
        let text = doc.text();
        assert!(text.contains("se encuentra registrada la denuncia N° 1234/2024, formulada en fecha 05/03/2024 por Ana Gómez"));
        assert!(text.contains("documento de identidad N° No especificado"));
        assert!(text.contains("a los fines de tramitar el cobro del siniestro."));
        assert!(text.contains("Dado en la ciudad de Rosario, a los 2 días del mes de abril de 2024."));
        assert!(text.contains("Oficial Marta Ríos Funcionario certificante - Placa N° 881"));
    }

    #[test]
    fn single_signature_spans_the_column() {
        let metrics = MonospaceMetrics::default();
        let doc = certificado(&request(None), &precinct(), None, &DocumentStyle::default(), &metrics)
            .expect("composes");
        assert!(!doc.text().contains("a los fines de"));

        let rule = doc.pages[0]
            .marks
            .iter()
            .rev()
            .find_map(|m| match m {
                Mark::Rule { x1, x2, .. } => Some((*x1, *x2)),
                _ => None,
            })
            .expect("signature rule");
        assert!((rule.0 .0 - 37.0).abs() < 1e-3);
        assert!((rule.1 .0 - 173.0).abs() < 1e-3);
    }
}

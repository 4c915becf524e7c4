use super::domain::{FormKind, Locale};

/// Confirmation copy returned to the visitor after a successful submission.
pub fn success_message(form: FormKind, locale: Locale) -> &'static str {
    match (form, locale) {
        (FormKind::Demo, Locale::Es) => {
            "¡Gracias! Nuestro equipo te contactará en menos de 24 horas para agendar tu demo."
        }
        (FormKind::Demo, Locale::En) => {
            "Thank you! Our team will reach out within 24 hours to schedule your demo."
        }
        (FormKind::Demo, Locale::Pt) => {
            "Obrigado! Nossa equipe entrará em contato em até 24 horas para agendar sua demonstração."
        }
        (FormKind::RoiCalculator, Locale::Es) => {
            "¡Listo! Te enviamos el análisis de ROI a tu correo."
        }
        (FormKind::RoiCalculator, Locale::En) => {
            "All set! We sent the ROI analysis to your inbox."
        }
        (FormKind::RoiCalculator, Locale::Pt) => {
            "Pronto! Enviamos a análise de ROI para o seu e-mail."
        }
        (FormKind::Contact, Locale::Es) => "Gracias por escribirnos. Te responderemos pronto.",
        (FormKind::Contact, Locale::En) => "Thanks for reaching out. We will get back to you soon.",
        (FormKind::Contact, Locale::Pt) => "Obrigado pelo contato. Responderemos em breve.",
    }
}

/// Subject line for the confirmation e-mail queued after capture.
pub fn confirmation_subject(form: FormKind, locale: Locale) -> &'static str {
    match (form, locale) {
        (FormKind::Demo, Locale::Es) => "Tu solicitud de demo en MADFAM",
        (FormKind::Demo, Locale::En) => "Your MADFAM demo request",
        (FormKind::Demo, Locale::Pt) => "Sua solicitação de demonstração na MADFAM",
        (FormKind::RoiCalculator, Locale::Es) => "Tu análisis de ROI de MADFAM",
        (FormKind::RoiCalculator, Locale::En) => "Your MADFAM ROI analysis",
        (FormKind::RoiCalculator, Locale::Pt) => "Sua análise de ROI da MADFAM",
        (FormKind::Contact, Locale::Es) => "Recibimos tu mensaje",
        (FormKind::Contact, Locale::En) => "We received your message",
        (FormKind::Contact, Locale::Pt) => "Recebemos sua mensagem",
    }
}

//! Narration scripts for accepted ideas.
//!
//! A script bundle holds a long-form voice-over, 15 s and 30 s cuts, voice
//! direction for the content type, and a section timing plan derived from
//! the target network's primary duration.

mod phrases;

use ideaforge_core::{
    ContentConfig, ContentType, IdeaRecord, NetworkProfile, ScriptBundle, ScriptTiming,
    VoiceDirection,
};

/// Average narration speed, about 150 words per minute.
const WORDS_PER_SECOND: f32 = 2.5;

/// Build the script bundle for `idea`.
///
/// Timing is derived from the first duration of `network`; without a
/// network, or when that duration cannot be parsed, `timing` is `None`.
#[must_use]
pub fn format_script(idea: &IdeaRecord, network: Option<&NetworkProfile>) -> ScriptBundle {
    let long_form = match idea.content_type {
        ContentType::Narrative => narrative_script(idea),
        ContentType::Educational => educational_script(idea),
    };

    let word_count = long_form.split_whitespace().count();
    #[allow(clippy::cast_precision_loss)]
    let estimated_secs = word_count as f32 / WORDS_PER_SECOND;

    ScriptBundle {
        short_15s: short_15s(idea),
        short_30s: short_30s(idea),
        voice: voice_direction(idea.content_type),
        timing: network
            .and_then(|n| n.durations.first())
            .and_then(|d| script_timing(d)),
        word_count,
        estimated_secs,
        long_form,
    }
}

/// Fill in `script` for every idea, looking up each idea's network in `content`.
pub fn attach_scripts(ideas: &mut [IdeaRecord], content: &ContentConfig) {
    for idea in ideas.iter_mut() {
        let network = content.network(&idea.network);
        if network.is_none() {
            tracing::debug!(network = %idea.network, "network not configured; script has no timing");
        }
        idea.script = Some(format_script(idea, network));
    }
}

/// Length in seconds of a duration label such as `"15s"`, `"3min"`, or `"1-3min"`.
///
/// Minute ranges use their midpoint. Returns `None` for anything else.
#[must_use]
pub fn duration_secs(label: &str) -> Option<u32> {
    let label = label.trim();
    if let Some(minutes) = label.strip_suffix("min") {
        match minutes.split_once('-') {
            Some((low, high)) => {
                let low: u32 = low.trim().parse().ok()?;
                let high: u32 = high.trim().parse().ok()?;
                low.checked_add(high)?.checked_mul(30)
            }
            None => minutes.trim().parse::<u32>().ok()?.checked_mul(60),
        }
    } else {
        label.strip_suffix('s')?.trim().parse().ok()
    }
}

/// Section timing for a video of the given duration label.
///
/// Up to 30 s the hook gets a third (at most 3 s), the body half, and the
/// climax and close a quarter each. Up to 60 s the hook, climax, and close
/// get 5 s each; longer videos get 10 s each. The body takes the rest.
#[must_use]
pub fn script_timing(label: &str) -> Option<ScriptTiming> {
    let secs = duration_secs(label)?;
    let timing = if secs <= 30 {
        ScriptTiming {
            total_secs: secs,
            hook_secs: (secs / 3).min(3),
            body_secs: secs / 2,
            climax_secs: secs / 4,
            close_secs: secs / 4,
        }
    } else if secs <= 60 {
        ScriptTiming {
            total_secs: secs,
            hook_secs: 5,
            body_secs: secs - 15,
            climax_secs: 5,
            close_secs: 5,
        }
    } else {
        ScriptTiming {
            total_secs: secs,
            hook_secs: 10,
            body_secs: secs - 30,
            climax_secs: 10,
            close_secs: 10,
        }
    };
    Some(timing)
}

fn voice_direction(content_type: ContentType) -> VoiceDirection {
    let (tone, pace, emotion) = match content_type {
        ContentType::Narrative => (
            "narrativo y dinámico",
            "variable según la tensión",
            "expresivo y dramático",
        ),
        ContentType::Educational => (
            "profesional y educativo",
            "clara y pausada",
            "entusiasta y confiado",
        ),
    };
    VoiceDirection {
        tone: tone.to_string(),
        pace: pace.to_string(),
        emotion: emotion.to_string(),
    }
}

fn narrative_script(idea: &IdeaRecord) -> String {
    let hook = non_empty_or(&idea.hook, "Una situación inesperada que lo cambió todo.");
    let mut sections = vec![format!(
        "¡No vas a creer esta historia sobre {}!\n\n{hook}\n\n{}\n\n",
        idea.title, idea.description
    )];

    let last = idea.key_points.len().saturating_sub(1);
    sections.extend(idea.key_points.iter().enumerate().map(|(i, point)| {
        if i == 0 {
            format!(
                "Primero, lo más impactante: {point}\nEsto no se ve todos los días, y la razón es que {}.\n\n",
                phrases::impact_reason(point)
            )
        } else if i == last {
            format!(
                "Y al final, el detalle que nadie esperaba: {point}\nLo sorprendente es que {}.\n\n",
                phrases::consequence(point)
            )
        } else {
            format!(
                "Después pasó algo más: {point}\nEsto lo cambió todo porque {}.\n\n",
                phrases::turning_detail(point)
            )
        }
    }));

    sections.push(format!(
        "La conclusión de esta historia es que {}.\n\n¿Te pasó algo parecido? Cuéntamelo en los comentarios.\nSi quieres más historias sobre {}, dale like y activa la campanita.\n",
        phrases::lesson(&idea.key_points),
        idea.topic
    ));
    sections.concat()
}

fn educational_script(idea: &IdeaRecord) -> String {
    let hook = non_empty_or(
        &idea.hook,
        "¿Sabías que la mayoría de personas comete errores en este tema?",
    );
    let mut sections = vec![format!(
        "¡Hola! Hoy te traigo {}, información que de verdad necesitas.\n\n{hook}\n\n{}\n\nVamos con información concreta y aplicable, no solo teoría.\n\n",
        idea.title, idea.description
    )];

    let last = idea.key_points.len().saturating_sub(1);
    sections.extend(idea.key_points.iter().enumerate().map(|(i, point)| {
        if i == 0 {
            format!(
                "El primer punto clave es: {point}\nEs fundamental porque {}.\n\n",
                phrases::practical_explanation(point)
            )
        } else if i == last {
            format!(
                "Por último, lo que marca la diferencia: {point}\nA diferencia de lo que muchos creen, {}.\n\n",
                phrases::differentiator(point)
            )
        } else {
            format!(
                "El siguiente aspecto importante: {point}\nEs esencial porque {}.\n\n",
                phrases::benefit(point)
            )
        }
    }));

    sections.push(format!(
        "Para aplicar lo que vimos hoy sobre {}:\n1. {}\n2. {}\n3. {}\n\nSi te sirvió, dale like y suscríbete para más contenido práctico.\n¿Qué aspecto de {} quieres que profundice en el próximo video?\n",
        idea.title,
        phrases::action_step(&idea.key_points, 0),
        phrases::action_step(&idea.key_points, 1),
        phrases::action_step(&idea.key_points, 2),
        idea.topic
    ));
    sections.concat()
}

fn short_15s(idea: &IdeaRecord) -> String {
    let lead = idea
        .key_points
        .first()
        .cloned()
        .unwrap_or_else(|| truncate_chars(&idea.description, 50));
    format!(
        "¡Atención! {}\n{lead}...\n¡Sígueme para más contenido como este!",
        idea.title
    )
}

fn short_30s(idea: &IdeaRecord) -> String {
    let point = idea.key_points.first().map_or("", String::as_str);
    format!(
        "¡No te pierdas esto! {}\n{}\n{point}\n¡Dale like y sígueme para más!",
        idea.title,
        truncate_chars(&idea.description, 100)
    )
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() {
        default
    } else {
        value
    }
}

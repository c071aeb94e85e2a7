//! Connective phrases chosen from the words of a key point.
//!
//! Each helper scans the lowercased point for trigger words and returns the
//! first matching phrase, or a default when nothing matches.

/// (trigger words, phrase) pairs, checked in order.
type PhraseRules = &'static [(&'static [&'static str], &'static str)];

fn pick(
    point: &str,
    rules: PhraseRules,
    short_default: &'static str,
    default: &'static str,
) -> &'static str {
    if point.chars().count() < 3 {
        return short_default;
    }
    let lowered = point.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    rules
        .iter()
        .find(|(triggers, _)| triggers.iter().any(|t| words.contains(t)))
        .map_or(default, |(_, phrase)| *phrase)
}

const IMPACT_RULES: PhraseRules = &[
    (&["problema", "error"], "la mayoría de personas comete este error sin darse cuenta"),
    (&["secreto", "truco"], "los expertos rara vez comparten esta información"),
    (&["descubrimiento", "hallazgo"], "contradice lo que se creía establecido hasta ahora"),
];

const TURN_RULES: PhraseRules = &[
    (&["nunca", "jamás", "imposible"], "desafía todas las expectativas que teníamos sobre el tema"),
    (&["siempre", "todos", "cada"], "establece un patrón que ahora podemos reconocer"),
];

const CONSEQUENCE_RULES: PhraseRules = &[
    (&["beneficio", "ventaja"], "puede multiplicar tus resultados si lo aplicas correctamente"),
    (&["estrategia", "técnica"], "quienes lo dominan tienen una ventaja enorme sobre el resto"),
    (&["evitar", "prevenir"], "te ahorrará problemas que la mayoría enfrenta por no saberlo"),
];

const LESSON_RULES: PhraseRules = &[
    (&["aprender", "estudiar", "conocer", "saber"], "el conocimiento siempre nos da ventaja ante lo imprevisto"),
    (&["éxito", "logro", "conseguir", "alcanzar"], "la perseverancia es fundamental para lograr resultados extraordinarios"),
    (&["problema", "error", "fracaso", "dificultad"], "los obstáculos son oportunidades para crecer"),
];

const EXPLANATION_RULES: PhraseRules = &[
    (&["inicio", "comenzar", "empezar", "primer"], "te permite partir de una base sólida y evitar los errores de principiante"),
    (&["optimizar", "mejorar", "aumentar", "incrementar"], "puede multiplicar tus resultados sin herramientas costosas"),
    (&["evitar", "prevenir", "reducir", "minimizar"], "te ahorra tiempo y frustración al corregir problemas desde el principio"),
];

const BENEFIT_RULES: PhraseRules = &[
    (&["tiempo", "rápido", "veloz", "inmediato"], "te permite lograr más con menos esfuerzo"),
    (&["dinero", "costo", "inversión", "precio"], "mejora el retorno de cada recurso que inviertes"),
    (&["calidad", "valor", "premium", "excelencia"], "eleva tu trabajo a un estándar profesional"),
];

const DIFFERENTIATOR_RULES: PhraseRules = &[
    (&["único", "especial", "diferente", "exclusivo"], "un enfoque personalizado supera al método estándar que todos conocen"),
    (&["rápido", "veloz", "inmediato", "instantáneo"], "puedes ver resultados en días, no en meses"),
    (&["fácil", "simple", "sencillo", "accesible"], "no necesitas herramientas complejas para aplicarlo"),
];

// Narrative beats.

pub(super) fn impact_reason(point: &str) -> &'static str {
    pick(
        point,
        IMPACT_RULES,
        "rompe con todas las expectativas del público",
        "menos del 2% de las personas conoce esta información",
    )
}

pub(super) fn turning_detail(point: &str) -> &'static str {
    pick(
        point,
        TURN_RULES,
        "revela una faceta completamente inesperada de la situación",
        "introduce un elemento que cambia nuestra comprensión de lo ocurrido",
    )
}

pub(super) fn consequence(point: &str) -> &'static str {
    pick(
        point,
        CONSEQUENCE_RULES,
        "cambia completamente nuestra perspectiva sobre el tema",
        "nadie lo vio venir",
    )
}

pub(super) fn lesson(key_points: &[String]) -> &'static str {
    pick(
        &key_points.join(" "),
        LESSON_RULES,
        "debemos estar atentos a los detalles inesperados que pueden cambiar todo",
        "las decisiones pequeñas pueden tener un impacto enorme",
    )
}

// Educational beats.

pub(super) fn practical_explanation(point: &str) -> &'static str {
    pick(
        point,
        EXPLANATION_RULES,
        "establece la base para todo lo que viene después",
        "marca una diferencia que pocas personas aplican correctamente",
    )
}

pub(super) fn benefit(point: &str) -> &'static str {
    pick(
        point,
        BENEFIT_RULES,
        "impacta directamente en tus resultados finales",
        "te da una ventaja sostenible a largo plazo",
    )
}

pub(super) fn differentiator(point: &str) -> &'static str {
    pick(
        point,
        DIFFERENTIATOR_RULES,
        "este es el factor que separa resultados mediocres de resultados extraordinarios",
        "un enfoque sistemático da resultados consistentes sin depender de la suerte",
    )
}

/// Step `index` (0-based) of the three-step action plan.
pub(super) fn action_step(key_points: &[String], index: usize) -> String {
    const GENERIC_STEPS: [&str; 3] = [
        "Identifica las áreas específicas donde puedes aplicar estos principios",
        "Implementa estos conceptos poco a poco, midiendo resultados en cada fase",
        "Evalúa y ajusta tu estrategia según los datos obtenidos",
    ];

    let Some(point) = key_points.get(index) else {
        return GENERIC_STEPS[index % GENERIC_STEPS.len()].to_string();
    };
    let point = point.to_lowercase();
    if index == 0 {
        format!("Empieza por {point} durante al menos 7 días seguidos")
    } else if index == key_points.len() - 1 {
        format!("Integra {point} en tu rutina habitual")
    } else {
        format!("Después de dominar lo básico, profundiza en {point} con práctica constante")
    }
}

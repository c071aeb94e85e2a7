//! Prompt construction for the two content approaches.

use ideaforge_core::NicheProfile;

/// Labelled response layout the parser understands.
const RESPONSE_FORMAT: &str = "FORMATO DE RESPUESTA:
Título: [título atractivo]
Hook: [hook inicial impactante de 1-2 frases]
Descripción: [descripción detallada del contenido]
Puntos Clave:
- [punto 1]
- [punto 2]
- [punto 3]
Hashtags: [5-7 hashtags relevantes]";

/// Build the provider prompt for `topic` on `network` in `niche`.
///
/// Educational niches get a learning-oriented prompt; the rest get a
/// story-driven one.
pub(crate) fn build_prompt(topic: &str, network: &str, niche: &NicheProfile) -> String {
    if niche.educational {
        educational_prompt(topic, network, niche)
    } else {
        narrative_prompt(topic, network, niche)
    }
}

fn educational_prompt(topic: &str, network: &str, niche: &NicheProfile) -> String {
    format!(
        "Genera una idea EDUCATIVA y VIRAL para un video de {network}.

TEMA: {topic}
NICHO: {niche_name}
ESTILO: {style}
AUDIENCIA: {audience}

LA IDEA DEBE INCLUIR:
1. Título que prometa valor educativo claro
2. Hook que demuestre por qué el tema es importante
3. 3-5 puntos de aprendizaje concretos
4. Ejemplos prácticos y aplicables
5. Datos o estadísticas relevantes
6. Call to action educativo
7. Hashtags específicos del tema

{RESPONSE_FORMAT}",
        niche_name = niche.name,
        style = or_general(&niche.style),
        audience = or_general(&niche.audience),
    )
}

fn narrative_prompt(topic: &str, network: &str, niche: &NicheProfile) -> String {
    format!(
        "Genera una idea VIRAL para un video de {network} con formato de historia.

TEMA: {topic}
NICHO: {niche_name}
ESTILO: Narrativo e informal
AUDIENCIA: {audience}

LA IDEA DEBE INCLUIR:
1. Título impactante que genere curiosidad
2. Hook inicial que enganche en los primeros segundos
3. Desarrollo de la historia con elementos de suspense
4. Giros inesperados o revelaciones sorprendentes
5. Conclusión memorable
6. Call to action específico
7. Hashtags relevantes

{RESPONSE_FORMAT}",
        niche_name = niche.name,
        audience = or_general(&niche.audience),
    )
}

fn or_general(value: &str) -> &str {
    if value.trim().is_empty() {
        "general"
    } else {
        value
    }
}

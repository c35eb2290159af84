//! Prompt templates for every adapter operation.

use chrono::NaiveDate;

use crate::domain::{ChartRequest, ChartSubject, DomainError, NatalChart};

/// Number of events a forecast asks for.
pub const FORECAST_EVENT_COUNT: usize = 4;

pub const ASTROLOGER_SYSTEM_PROMPT: &str = "\
You are a precise professional astrologer. Follow the requested output format exactly. \
When JSON is requested, return only JSON with no prose and no markdown fences.";

pub fn natal_chart_prompt(request: &ChartRequest) -> String {
    format!(
        "\
TASK: High-Precision Natal Chart Calculation (Swiss Ephemeris Standard)

SUBJECT:
Name: {name}
Birth Date: {date}
Birth Time: {time} (local time)
Birth Location: {location}

REQUIREMENTS:
1. Calculate exact longitudinal positions for the Sun, Moon, Mercury, Venus, Mars, Jupiter, Saturn, Uranus, Neptune, Pluto, and the Ascendant.
2. Use the Placidus House System.
3. Determine degrees (0-29) and minutes (0-59) within each Zodiac Sign.
4. Detect Retrograde status for all planets.
5. Determine the House placement (1-12) for each celestial body.
6. Identify Planetary Dignity: Domicile, Exaltation, Detriment, Fall, or Neutral.
7. Identify Sign Element: Fire, Earth, Air, Water.
8. Calculate MAJOR ASPECTS (Conjunction, Sextile, Square, Trine, Opposition) between all planets with a max orb of 6 degrees.
9. Provide a \"synthesis\" - a 150-word high-vibration narrative summarizing the subject's soul architecture.

OUTPUT:
Return valid JSON. Be extremely precise.",
        name = request.name,
        date = request.birth_date,
        time = request.birth_time,
        location = request.birth_location,
    )
}

/// Planetary positions as compact JSON, the form charts take inside prompts.
pub fn embed_chart(chart: &NatalChart) -> Result<String, DomainError> {
    serde_json::to_string(&chart.positions)
        .map_err(|e| DomainError::invalid_input(format!("chart cannot be embedded: {e}")))
}

pub fn compatibility_prompt(
    subject: ChartSubject<'_>,
    candidate: ChartSubject<'_>,
) -> Result<String, DomainError> {
    Ok(format!(
        "\
Analyze Synastry compatibility between two natal charts.
User 1: {name1} ({chart1})
User 2: {name2} ({chart2})

Look for specific aspects: Conjunctions, Trines, Squares, Oppositions, and Sextiles.

SPECIAL FOCUS:
1. Calculate the key Sun-Moon aspects between these two individuals.
2. Calculate the key Venus-Mars aspects between these two individuals (attraction and drive).

Identify the single most influential Sun-Moon aspect and Venus-Mars aspect.

Calculate a compatibility score (0-100) and label the connection as Soulmate, Twin Flame, Karmic, or Steady.",
        name1 = subject.name,
        chart1 = embed_chart(subject.chart)?,
        name2 = candidate.name,
        chart2 = embed_chart(candidate.chart)?,
    ))
}

pub fn icebreaker_prompt(
    subject: ChartSubject<'_>,
    candidate: ChartSubject<'_>,
) -> Result<String, DomainError> {
    Ok(format!(
        "\
Based on their Synastry Aspects:
User 1 Chart: {chart1}
User 2 Chart: {chart2}

Create a deep, specific icebreaker that references a particular astrological connection (e.g., \"The way your Moon interacts with their Neptune suggests...\").
Keep it mysterious, high-vibration, and romantic. Under 25 words. Reply with the icebreaker only.",
        chart1 = embed_chart(subject.chart)?,
        chart2 = embed_chart(candidate.chart)?,
    ))
}

pub fn forecast_prompt(subject: ChartSubject<'_>, as_of: NaiveDate) -> Result<String, DomainError> {
    Ok(format!(
        "\
TASK: Personal Astrological Event Forecast
CURRENT DATE: {today}
USER CHART: {chart}

REQUIREMENTS:
1. Identify {count} major upcoming astrological events (Full/New Moons, Planetary Retrogrades, Major Transits) starting from today.
2. Provide a personalized \"influence\" description (30-50 words) explaining how this specific event interacts with the user's natal chart.
3. Categorize each event (Moon, Retrograde, Transit, Eclipse).
4. Define a one-word \"vibe\" (e.g., Transformative, Reflective, Energizing).

OUTPUT: Valid JSON.",
        today = as_of.format("%Y-%m-%d"),
        chart = embed_chart(subject.chart)?,
        count = FORECAST_EVENT_COUNT,
    ))
}

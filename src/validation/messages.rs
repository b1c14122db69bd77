//! Player-facing feedback copy (pt-BR)

use crate::core::types::GameMode;
use crate::spatial::Direction;

/// Distance as shown to the player: "85 m", "1,2 km"
pub fn format_distance(distance_m: f64) -> String {
    // Bucket on the shown value so 999.6 reads "1,0 km", not "1000 m"
    if distance_m.round() < 1000.0 {
        format!("{:.0} m", distance_m)
    } else {
        format!("{:.1} km", distance_m / 1000.0).replace('.', ",")
    }
}

/// Feedback sentence for one click
///
/// Bucketed by distance (< 100 m, < 250 m, < 500 m, < 1 km, beyond) with
/// separate hit and miss openers.
pub fn feedback(
    mode: GameMode,
    is_hit: bool,
    distance_m: f64,
    direction: Option<Direction>,
    name: &str,
) -> String {
    if distance_m == 0.0 {
        return match mode {
            GameMode::Neighborhoods => format!("Perfeito! Você clicou dentro do bairro {}.", name),
            GameMode::FamousPlaces => format!("Perfeito! Você encontrou {} em cheio.", name),
        };
    }

    let opener = if is_hit {
        match distance_m {
            d if d < 100.0 => "Na mosca!",
            d if d < 250.0 => "Muito bem!",
            d if d < 500.0 => "Acertou!",
            d if d < 1000.0 => "Acertou, por pouco!",
            _ => "Acertou, no limite!",
        }
    } else {
        match distance_m {
            d if d < 100.0 => "Quase lá!",
            d if d < 250.0 => "Passou perto!",
            d if d < 500.0 => "Não foi dessa vez.",
            d if d < 1000.0 => "Longe...",
            _ => "Muito longe!",
        }
    };

    // Neighborhoods are measured to their border, places to their spot
    let subject = match mode {
        GameMode::Neighborhoods => format!("O bairro {} começa", name),
        GameMode::FamousPlaces => format!("{} fica", name),
    };

    let distance = format_distance(distance_m);
    match direction {
        Some(dir) => format!("{} {} a {} {} do seu clique.", opener, subject, distance, dir.phrase()),
        None => format!("{} {} a {} do seu clique.", opener, subject, distance),
    }
}

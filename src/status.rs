use pixel_particles::EffectEvent;

pub const CANVAS_ARIA_LABEL: &str = "Animated particle effect showing ROR ID with floating pixels";

/// Text for the polite live region next to the particle canvas.
pub fn announcement(event: EffectEvent, text: &str) -> String {
    match event {
        EffectEvent::Started => format!("Animating particles to form the ROR ID: {}", text),
        EffectEvent::Settled => format!("Animation complete. Displaying ROR ID: {}", text),
    }
}

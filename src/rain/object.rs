use crate::model::{beatmap::Beatmap, hit_object::HitObjectKind};

use super::PLAYFIELD_WIDTH;

/// A catchable object: a fruit or droplet falling at a fixed horizontal
/// position.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RainObject {
    pub x: f32,
    pub start_time: f64,
    pub kind: RainObjectKind,
    /// Tiny droplets that spawn alongside this object. They don't give combo
    /// and are only relevant for the hitresult counts.
    pub tiny_droplets: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum RainObjectKind {
    Fruit,
    Droplet,
}

impl RainObject {
    const fn fruit(x: f32, start_time: f64) -> Self {
        Self {
            x,
            start_time,
            kind: RainObjectKind::Fruit,
            tiny_droplets: 0,
        }
    }

    const fn droplet(x: f32, start_time: f64) -> Self {
        Self {
            x,
            start_time,
            kind: RainObjectKind::Droplet,
            tiny_droplets: 0,
        }
    }

    pub const fn is_fruit(&self) -> bool {
        matches!(self.kind, RainObjectKind::Fruit)
    }

    /// Shift the position the way the alternate spatial transform nudges
    /// consecutive objects apart.
    fn with_offsets(mut self, last_pos: &mut Option<f32>, last_time: &mut f64) -> Self {
        let mut offset_pos = self.x;
        let time_diff = self.start_time - *last_time;

        if let Some(last_pos_ref) = last_pos.filter(|_| time_diff <= 1000.0) {
            let pos_diff = offset_pos - last_pos_ref;

            if pos_diff.abs() > f32::EPSILON {
                if f64::from(pos_diff.abs()) < (time_diff / 3.0).floor() {
                    if pos_diff > 0.0 {
                        if offset_pos + pos_diff < PLAYFIELD_WIDTH {
                            offset_pos += pos_diff;
                        }
                    } else if offset_pos + pos_diff > 0.0 {
                        offset_pos += pos_diff;
                    }
                }

                last_pos.replace(offset_pos);
                *last_time = self.start_time;
            }

            self.x = offset_pos;
        } else {
            last_pos.replace(offset_pos);
            *last_time = self.start_time;
        }

        self
    }
}

/// Generate the palpable objects of a map, sorted by start time.
///
/// Sliders spawn a fruit at the head, a droplet per tick, and a fruit at
/// every span end. The in-between tiny droplets are attached to the fruit
/// that closes their span. Spinners don't produce catchable objects.
pub(crate) fn palpable_objects(map: &Beatmap, hardrock_offsets: bool) -> Vec<RainObject> {
    let tick_interval = map.slider_tick_interval();
    let tiny_interval = tick_interval / 4.0;

    let mut objects = Vec::with_capacity(map.hit_objects.len());

    for h in map.hit_objects.iter() {
        match h.kind {
            HitObjectKind::Circle | HitObjectKind::Hold(_) => {
                objects.push(RainObject::fruit(h.pos.x, h.start_time));
            }
            HitObjectKind::Slider(ref slider) => {
                // Without stored path data every nested object falls at the
                // head position; timing is what drives the movement skill.
                let x = h.pos.x;
                let span_duration = slider.span_duration();

                let ticks_per_span =
                    ((span_duration / tick_interval).ceil() - 1.0).max(0.0) as u32;
                let tiny_per_span = (((span_duration / tiny_interval).ceil() - 1.0).max(0.0)
                    as u32)
                    .saturating_sub(ticks_per_span);

                objects.push(RainObject::fruit(x, h.start_time));

                for span in 0..slider.span_count() {
                    let span_start = h.start_time + span as f64 * span_duration;

                    for tick in 1..=ticks_per_span {
                        objects
                            .push(RainObject::droplet(x, span_start + f64::from(tick) * tick_interval));
                    }

                    let mut tail = RainObject::fruit(x, span_start + span_duration);
                    tail.tiny_droplets = tiny_per_span;
                    objects.push(tail);
                }
            }
            HitObjectKind::Spinner(_) => {}
        }
    }

    if hardrock_offsets {
        let mut last_pos = None;
        let mut last_time = 0.0;

        for h in objects.iter_mut() {
            *h = h.clone().with_offsets(&mut last_pos, &mut last_time);
        }
    }

    objects
}

#[cfg(test)]
mod tests {
    use crate::model::hit_object::{HitObject, Pos, Slider};

    use super::*;

    fn circle(x: f32, start_time: f64) -> HitObject {
        HitObject {
            pos: Pos::new(x, 192.0),
            start_time,
            kind: HitObjectKind::Circle,
        }
    }

    #[test]
    fn spinners_are_not_palpable() {
        let mut map = Beatmap::default();
        map.hit_objects = vec![
            circle(100.0, 0.0),
            HitObject {
                pos: Pos::new(256.0, 192.0),
                start_time: 500.0,
                kind: HitObjectKind::Spinner(crate::model::hit_object::Spinner {
                    duration: 1000.0,
                }),
            },
            circle(200.0, 2000.0),
        ];

        let objects = palpable_objects(&map, false);

        assert_eq!(objects.len(), 2);
        assert!(objects.iter().all(RainObject::is_fruit));
    }

    #[test]
    fn slider_spawns_head_ticks_and_span_ends() {
        let mut map = Beatmap::default();
        map.bpm = 60.0;
        map.slider_tick_rate = 1.0;

        // One span of 2.5 tick intervals: head, 2 droplets, tail
        map.hit_objects = vec![HitObject {
            pos: Pos::new(100.0, 192.0),
            start_time: 0.0,
            kind: HitObjectKind::Slider(Slider {
                expected_dist: Some(300.0),
                repeats: 0,
                duration: 2500.0,
            }),
        }];

        let objects = palpable_objects(&map, false);

        let n_fruits = objects.iter().filter(|h| h.is_fruit()).count();
        let n_droplets = objects.iter().filter(|h| !h.is_fruit()).count();

        assert_eq!((n_fruits, n_droplets), (2, 2));
    }
}

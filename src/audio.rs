use std::f32::consts::PI;
use std::thread;
use std::time::Duration;

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};

const SAMPLE_RATE: u32 = 44_100;
const VOLUME: f32 = 0.2;

/// Background melody, looped for the whole session: (frequency Hz, duration
/// ms) pairs followed by a one second rest.
const MELODY: [(f32, u64); 21] = [
    (1320.0, 150),
    (990.0, 100),
    (1056.0, 100),
    (1188.0, 100),
    (1320.0, 50),
    (1188.0, 50),
    (1056.0, 100),
    (990.0, 100),
    (880.0, 300),
    (880.0, 100),
    (1056.0, 100),
    (1320.0, 300),
    (1188.0, 100),
    (1056.0, 100),
    (990.0, 300),
    (1056.0, 100),
    (1188.0, 300),
    (1320.0, 300),
    (1056.0, 300),
    (880.0, 300),
    (880.0, 300),
];

/// Spawn the music thread. Best-effort: if no output device exists or the
/// sink cannot be created, the thread just ends and the game stays silent.
/// Nothing here shares state with the game.
pub fn start_music() {
    let _ = thread::Builder::new().name("music".into()).spawn(|| {
        let Ok((_stream, handle)) = OutputStream::try_default() else {
            return;
        };
        loop {
            let Ok(sink) = Sink::try_new(&handle) else {
                return;
            };
            for &(freq, ms) in MELODY.iter() {
                sink.append(tone(freq, ms));
            }
            sink.sleep_until_end();
            thread::sleep(Duration::from_secs(1));
        }
    });
}

fn tone(freq: f32, ms: u64) -> SamplesBuffer<f32> {
    let len = (SAMPLE_RATE as u64 * ms / 1000) as usize;
    let samples: Vec<f32> = (0..len)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            (t * freq * 2.0 * PI).sin() * VOLUME
        })
        .collect();
    SamplesBuffer::new(1, SAMPLE_RATE, samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_length_matches_duration() {
        let buffer = tone(880.0, 300);
        // 300 ms of mono audio at 44.1 kHz.
        let samples: Vec<f32> = buffer.collect();
        assert_eq!(samples.len(), 13_230);
        assert!(samples.iter().all(|s| s.abs() <= VOLUME));
    }
}

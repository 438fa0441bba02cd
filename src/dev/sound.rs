/// PC speaker collaborator. Tones are fire and forget.
pub trait Speaker {
    fn play_tone(&mut self, frequency: u16, tenths: u16);
    fn stop(&mut self);
}

/// A speaker that remembers what it was asked to play.
#[derive(Debug, Default, Clone)]
pub struct Silent {
    pub tones: Vec<(u16, u16)>,
    pub playing: bool,
}

impl Speaker for Silent {
    fn play_tone(&mut self, frequency: u16, tenths: u16) {
        self.tones.push((frequency, tenths));
        self.playing = true;
    }

    fn stop(&mut self) {
        self.playing = false;
    }
}

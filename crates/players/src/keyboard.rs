use dialoguer::console::Key;
use dialoguer::console::Term;
use rfx_gameroom::Choice;
use rfx_hands::Hand;
use tokio::sync::mpsc::UnboundedReceiver;

/// Raw keys from the controlling terminal.
///
/// A dedicated thread blocks on the terminal and forwards every key, so
/// the async side can race keys against round deadlines. The same stream
/// serves between-run prompts, keeping a single reader on stdin.
pub struct Keyboard(UnboundedReceiver<Key>);

impl Keyboard {
    pub fn spawn() -> Self {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        std::thread::spawn(move || {
            let term = Term::stdout();
            loop {
                match term.read_key() {
                    Ok(key) => {
                        if tx.send(key).is_err() {
                            break;
                        }
                    }
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                        log::warn!("[keyboard] interrupt received, exiting immediately");
                        std::process::exit(0);
                    }
                    Err(e) => {
                        log::debug!("[keyboard] reader stopped: {}", e);
                        break;
                    }
                }
            }
        });
        Self(rx)
    }
    pub async fn next(&mut self) -> Option<Key> {
        self.0.recv().await
    }
    /// Discards keys typed ahead of a prompt.
    pub fn flush(&mut self) {
        while self.0.try_recv().is_ok() {}
    }
    /// Maps a key to a choice. The caller binds it to the open round.
    ///
    /// Positions: arrows left/down/right, `1`/`2`/`3`, or `a`/`s`/`d`.
    /// Hands by initial: `r`, `p`, and `x` for scissors.
    pub fn choice(key: &Key) -> Option<Choice> {
        match key {
            Key::ArrowLeft | Key::Char('1') | Key::Char('a') => Some(Choice::Slot(0)),
            Key::ArrowDown | Key::Char('2') | Key::Char('s') => Some(Choice::Slot(1)),
            Key::ArrowRight | Key::Char('3') | Key::Char('d') => Some(Choice::Slot(2)),
            Key::Char('r') => Some(Choice::Hand(Hand::Rock)),
            Key::Char('p') => Some(Choice::Hand(Hand::Paper)),
            Key::Char('x') => Some(Choice::Hand(Hand::Scissors)),
            _ => None,
        }
    }
}

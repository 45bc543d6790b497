use std::io::Write;
use std::rc::Rc;
use std::sync::mpsc::Receiver;

/// Modal dialogs shown by the page. `alert` returns only once dismissed.
pub trait Dialog {
    fn alert(&mut self, text: &str);
}

/// Prints the dialog and blocks until the next console line arrives.
pub struct ConsoleDialog<W: Write> {
    input: Rc<Receiver<String>>,
    out: W,
}

impl<W: Write> ConsoleDialog<W> {
    pub fn new(input: Rc<Receiver<String>>, out: W) -> Self {
        Self { input, out }
    }
}

impl<W: Write> Dialog for ConsoleDialog<W> {
    fn alert(&mut self, text: &str) {
        let _ = writeln!(self.out, "[alert] {text}  (press Enter)");
        let _ = self.out.flush();
        // A closed input also dismisses the dialog.
        let _ = self.input.recv();
    }
}

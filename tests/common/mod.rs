use basic::mach::{Event, Runtime};

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

#[allow(dead_code)]
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped | Event::Quit => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(ps);
            }
            Event::Input(ps) => {
                s.push_str(ps);
                break;
            }
            Event::List(ls) => {
                s.push_str(&format!("{}\n", ls));
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}

#[allow(dead_code)]
pub fn enter_all(runtime: &mut Runtime, lines: &[&str]) {
    for line in lines {
        runtime.enter(line);
    }
}

/// Collects printed output until `count` print events have been seen.
#[allow(dead_code)]
pub fn exec_prints(runtime: &mut Runtime, count: usize) -> String {
    let mut s = String::new();
    let mut seen = 0;
    while seen < count {
        match runtime.execute(5000) {
            Event::Print(ps) => {
                s.push_str(&ps);
                seen += 1;
            }
            Event::Running => {}
            _ => break,
        }
    }
    s
}

use crate::assembler::Program;
use crate::symbol::Kind;
use color_print::cformat;

/// One listing row per emitted instruction; labels are shown on their own row
/// just before the instruction they point at.
pub fn listing(program: &Program) -> Vec<String> {
    let mut labels: Vec<(&String, u16)> = program
        .symbols
        .iter()
        .filter(|(_, symbol)| symbol.kind == Kind::Label)
        .map(|(name, symbol)| (name, symbol.value))
        .collect();
    labels.sort_by_key(|&(_, pc)| pc);

    let mut rows = vec![];
    let mut pending = labels.into_iter().peekable();
    for (pc, (line, inst)) in program.code.iter().zip(&program.insts).enumerate() {
        while let Some((name, _)) = pending.next_if(|&(_, at)| at as usize == pc) {
            rows.push(cformat!("{:24}| {:>5}: <g>({})</>", "", "", name));
        }
        rows.push(cformat!(
            "[<g>{:04X}</>] {} | {:>5}: {}",
            pc,
            inst.to_bin_string(),
            line.no(),
            inst.cformat()
        ));
    }
    for (name, _) in pending {
        rows.push(cformat!("{:24}| {:>5}: <g>({})</>", "", "", name));
    }
    rows
}

pub fn print(program: &Program) {
    println!("------------------------+----------------------------------------");
    for row in listing(program) {
        println!("{}", row);
    }
    println!("------------------------+----------------------------------------");
}

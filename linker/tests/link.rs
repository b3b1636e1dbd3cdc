use linker::{link_source, Diag, Error, Linked, Listing, Machine};

fn link(code: &str) -> Linked {
    link_source("test.obj", code, &Machine::default()).unwrap()
}

// Every recoverable error at once.
const FAULTY: &str = "
3
1 X 1
1 Y 0 -1
2 E 1000 I 5555
2 Y 0 X 7
1 X 1 -1
3 A 2010 E 3000 R 4002
1 Z 9
2 W 0 -1 Y 0 3 -1
1 E 6000
";

#[test]
fn clean_program() {
    let linked = link(
        "2
         1 START 0  1 LOOP 1 -1  2 R 1001 E 2000
         1 LOOP 0   1 START 0 -1  1 E 3000",
    );
    assert_eq!(linked.memory.values(), vec![1001, 2002, 3000]);
    assert_eq!(linked.memory.len(), 3);
    assert_eq!(linked.symbols.get_addr("START"), Some(0));
    assert_eq!(linked.symbols.get_addr("LOOP"), Some(2));
    assert_eq!(linked.diags().count(), 0);
}

#[test]
fn memory_covers_every_module() {
    let linked = link(FAULTY);
    let sizes: usize = linked.layout.placements().iter().map(|p| p.size).sum();
    assert_eq!(linked.memory.len(), sizes);
    assert_eq!(linked.layout.total(), 6);
}

#[test]
fn symbol_table() {
    let linked = link(FAULTY);
    let rows: Vec<_> = linked
        .symbols
        .iter()
        .map(|(name, s)| (name.as_str(), s.addr, s.module, s.diags.clone()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("X", 1, 1, vec![Diag::MultiplyDefined]),
            ("Y", 2, 2, vec![]),
            ("Z", 5, 3, vec![Diag::DefinitionExceedsModule]),
        ]
    );
    assert!(!linked.symbols.contains("W"));
}

#[test]
fn memory_map() {
    let linked = link(FAULTY);
    assert_eq!(
        linked.memory.values(),
        vec![1002, 5555, 2010, 3001, 4004, 6000]
    );
    assert_eq!(
        linked.memory.get(5).unwrap().diags,
        vec![Diag::MultipleUses, Diag::Undefined("W".to_string())]
    );
    for addr in 0..5 {
        assert!(linked.memory.get(addr).unwrap().diags.is_empty());
    }
}

#[test]
fn trailing_order() {
    let linked = link(FAULTY);
    assert_eq!(
        linked.trailing,
        vec![
            Diag::UseExceedsModule("Y".to_string(), 3),
            Diag::NeverUsed("Z".to_string(), 3),
        ]
    );
}

#[test]
fn absolute_bound() {
    let linked = link("1 0 0 2 A 1199 A 1200");
    assert_eq!(linked.memory.values(), vec![1199, 1000]);
    assert!(linked.memory.get(0).unwrap().diags.is_empty());
    assert_eq!(
        linked.memory.get(1).unwrap().diags,
        vec![Diag::AbsoluteExceedsMachine]
    );

    let wide = link_source("t", "1 0 0 1 A 1200", &Machine::new(300)).unwrap();
    assert_eq!(wide.memory.values(), vec![1200]);
    assert_eq!(wide.diags().count(), 0);
}

#[test]
fn external_resolution() {
    let linked = link("2  1 A 1  1 B 0 -1  2 E 7000 I 0  0  1 A 1 -1  2 I 1 E 8000");
    assert_eq!(linked.memory.values(), vec![7000, 0, 1, 8001]);
    assert_eq!(
        linked.memory.get(0).unwrap().diags,
        vec![Diag::Undefined("B".to_string())]
    );
}

#[test]
fn redefinition_counted_per_extra_definition() {
    let linked = link("3  1 S 0 0 1 I 1  1 S 0 0 1 I 2  1 S 0 0 1 I 3");
    let s = linked.symbols.get("S").unwrap();
    assert_eq!(s.addr, 0);
    assert_eq!(s.diags, vec![Diag::MultiplyDefined, Diag::MultiplyDefined]);
}

#[test]
fn lone_definition() {
    let linked = link("1  1 A 0  0  1 E 0100");
    assert_eq!(linked.symbols.get_addr("A"), Some(0));
    assert_eq!(linked.memory.values(), vec![0]);
    assert_eq!(linked.trailing, vec![Diag::NeverUsed("A".to_string(), 1)]);
}

#[test]
fn idempotent() {
    let first = link(FAULTY);
    let second = link(FAULTY);
    assert_eq!(
        Listing::new(&first).to_text(false),
        Listing::new(&second).to_text(false)
    );
}

#[test]
fn fatal_errors_carry_location() {
    let err = link_source("t", "1\n0 0 1 A x100", &Machine::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidWord(..)));
    assert_eq!(err.loc().unwrap().to_string(), "t:2:9");

    let err = link_source("t", "2 0 0 0", &Machine::default()).unwrap_err();
    assert!(matches!(err, Error::UnexpectedEOF(_)));
    assert!(err.loc().is_none());
}

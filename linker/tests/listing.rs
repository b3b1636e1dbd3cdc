use linker::{link_source, Format, Listing, Machine};

const FAULTY: &str = "3
1 X 1 1 Y 0 -1 2 E 1000 I 5555
2 Y 0 X 7 1 X 1 -1 3 A 2010 E 3000 R 4002
1 Z 9 2 W 0 -1 Y 0 3 -1 1 E 6000
";

fn render(code: &str, format: Format) -> String {
    let linked = link_source("test.obj", code, &Machine::default()).unwrap();
    Listing::new(&linked).render(format, false).unwrap()
}

#[test]
fn text() {
    let expect = "\
Symbol Table
X=1 Error: This variable is multiply defined; first value used.
Y=2
Z=5 Error: Definition exceeds module size; first word in module used.

Memory Map
0: 1002
1: 5555
2: 2010
3: 3001
4: 4004
5: 6000 Error: Multiple variables used in instruction; all but first ignored. Error: W is not defined; zero used.

Error: Use of Y in module 3 exceeds module size; use ignored.
Warning: Z was defined in module 3 but never used.
";
    assert_eq!(render(FAULTY, Format::Text), expect);
}

#[test]
fn text_single_module() {
    let expect = "\
Symbol Table
A=0

Memory Map
0: 0 Error: External address is not bound to any symbol; zero used.

Warning: A was defined in module 1 but never used.
";
    assert_eq!(render("1 1 A 0 0 1 E 0100", Format::Text), expect);
}

#[test]
fn text_without_modules() {
    assert_eq!(render("0", Format::Text), "Symbol Table\n\nMemory Map\n\n");
}

#[test]
fn json() {
    let json: serde_json::Value = serde_json::from_str(&render(FAULTY, Format::Json)).unwrap();
    assert_eq!(json["symbols"]["X"]["addr"], 1);
    assert_eq!(json["symbols"]["Z"]["module"], 3);
    assert_eq!(
        json["symbols"]["X"]["errors"][0],
        "Error: This variable is multiply defined; first value used."
    );
    assert_eq!(json["memory"][4]["value"], 4004);
    assert_eq!(json["memory"][5]["errors"].as_array().unwrap().len(), 2);
    assert_eq!(
        json["trailing"][1],
        "Warning: Z was defined in module 3 but never used."
    );
}

#[test]
fn yaml() {
    let yaml: serde_yaml::Value = serde_yaml::from_str(&render(FAULTY, Format::Yaml)).unwrap();
    assert_eq!(yaml["symbols"]["Y"]["addr"].as_u64(), Some(2));
    assert_eq!(yaml["memory"][0]["value"].as_i64(), Some(1002));
    assert_eq!(yaml["trailing"].as_sequence().unwrap().len(), 2);

    // Symbols keep their first definition order.
    let names: Vec<_> = yaml["symbols"]
        .as_mapping()
        .unwrap()
        .keys()
        .map(|k| k.as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["X", "Y", "Z"]);
}

#[test]
fn color_keeps_messages() {
    let linked = link_source("t", FAULTY, &Machine::default()).unwrap();
    let colored = Listing::new(&linked).to_text(true);
    assert!(colored.contains("W is not defined; zero used."));
    assert!(colored.contains("Z was defined in module 3 but never used."));
}

#[test]
fn text_repeated_definition_in_module() {
    let expect = "\
Symbol Table
A=1

Memory Map
0: 1
1: 2

Warning: A was defined in module 1 but never used.
";
    assert_eq!(render("1 2 A 0 A 1 0 2 I 1 I 2", Format::Text), expect);
}

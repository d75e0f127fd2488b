use sdegen::{
    BuilderOptions, Contact, Dimension, DopingType, MeshSpec, Point, Polarity, RegionDoping, ScriptBuilder,
    ScriptVariable, SdeError,
};

fn builder(dimension: Dimension, comments: bool) -> ScriptBuilder<Vec<u8>> {
    let _ = env_logger::builder().is_test(true).try_init();
    ScriptBuilder::new(
        Vec::new(),
        BuilderOptions {
            dimension,
            comments,
            ..BuilderOptions::default()
        },
    )
}

fn spoke_device(builder: &mut ScriptBuilder<Vec<u8>>) -> Result<(), SdeError> {
    builder.preamble(true, "ABA")?;
    builder.workbench_variables(&["is_T_spoke", "inner_p"])?;
    builder.script_variables(&[
        ScriptVariable::new("w_spoke", 0.5),
        ScriptVariable::new("outer_spoke_l", 1.7),
    ])?;
    builder.rectangle(
        &Point::from((0, 0)),
        &Point::from(("w_spoke", "(outer_spoke_l + 0.5)/2")),
        "Silicon",
        "middle_spoke",
    )?;
    builder.rectangle(
        &Point::from((0, "(outer_spoke_l + 0.5)/2")),
        &Point::from(("w_spoke", "outer_spoke_l")),
        "Silicon",
        "outer_spoke",
    )?;
    builder.vertex(&Point::from((0, "outer_spoke_l / 2")))?;
    builder.contacts(&[
        Contact::new("middle_contact", (0, 0)),
        Contact::new("outer_contact", ("w_spoke/2", "outer_spoke_l")),
    ])?;
    builder.constant_doping(
        &[
            DopingType::new("P_doping", Polarity::P, 1e18),
            DopingType::new("N++_doping", Polarity::N, 1e20),
        ],
        &[
            RegionDoping::new("middle_spoke", "P_doping"),
            RegionDoping::new("outer_spoke", "N++_doping"),
        ],
    )?;
    builder.rectangular_mesh(&MeshSpec {
        name: "spoke".to_owned(),
        p1: Point::from((0, 0)),
        p2: Point::from(("w_spoke", "outer_spoke_l")),
        sizes: vec![0.05, 0.005, 0.1, 0.01],
        refinements: vec![vec!["DopingConcentration".into(), "MaxTransDiff".into(), 1.into()]],
    })?;
    builder.if_clause("is_T_spoke = 1", "(define inner_w w_spoke)", Some("(define inner_w 0)"))
}

#[test]
fn full_script_without_comments() {
    let mut builder = builder(Dimension::TwoD, false);
    spoke_device(&mut builder).unwrap();
    let script = String::from_utf8(builder.finish().unwrap()).unwrap();

    let expected = "\
(sde:clear)
(sdegeo:set-default-boolean \"ABA\")

(define is_T_spoke @is_T_spoke@) 
(define inner_p @inner_p@) 

(define w_spoke 5.00000e-01) 
(define outer_spoke_l 1.70000e+00) 

(sdegeo:create-rectangle (position (0.000e+00) (0.000e+00) (0.000e+00)) (position (w_spoke) (/ + outer_spoke_l 0.5 2) (0.000e+00)) \"Silicon\" \"middle_spoke\")
(sdegeo:create-rectangle (position (0.000e+00) (/ + outer_spoke_l 0.5 2) (0.000e+00)) (position (w_spoke) (outer_spoke_l) (0.000e+00)) \"Silicon\" \"outer_spoke\")
(sdegeo:insert-vertex (position (0.000e+00) (/ outer_spoke_l 2) (0.000e+00)))
(sdegeo:define-contact-set \"middle_contact\" 4 (color:rgb 1 0 0) \"##\") 
(sdegeo:set-current-contact-set \"middle_contact\") 
(sdegeo:define-2d-contact (find-edge-id (position (0.000e+00) (0.000e+00) (0.000e+00))) \"middle_contact\") 

(sdegeo:define-contact-set \"outer_contact\" 4 (color:rgb 1 0 0) \"##\") 
(sdegeo:set-current-contact-set \"outer_contact\") 
(sdegeo:define-2d-contact (find-edge-id (position (/ w_spoke 2) (outer_spoke_l) (0.000e+00))) \"outer_contact\") 


(sdedr:define-constant-profile \"P_doping\"  BoronActiveConcentration 1.000e+18) 
(sdedr:define-constant-profile \"N++_doping\"  PhosphorusActiveConcentration 1.000e+20) 

(sdedr:define-constant-profile-region \"middle_spok\" \"P_doping\" \"middle_spoke\") 
(sdedr:define-constant-profile-region \"outer_spok\" \"N++_doping\" \"outer_spoke\") 

(sdedr:define-refinement-window  \"RefWin.spoke\"  \"Rectangle\"  (position (0.000e+00) (0.000e+00) (0.000e+00)) (position (w_spoke) (outer_spoke_l) (0.000e+00))) 

(sdedr:define-refinement-size \"RefDef.spoke\" 5.000e-02 1.000e-01 5.000e-03 1.000e-02) 

(sdedr:define-refinement-function \"RefDef.spoke\" \"DopingConcentration\" \"MaxTransDiff\" 1.00e+00 ) 

(sdedr:define-refinement-placement  \"PlaceRF.spoke\"  \"RefDef.spoke\"  \"RefWin.spoke\") 


(if (= is_T_spoke 1) 
 (begin 
 (define inner_w w_spoke) 
 ) 
 (begin 
 (define inner_w 0) 
 ) 
) 

(sde:build-mesh \"snmesh\" \"\" \"n@node@\")
";
    assert_eq!(script, expected);
}

#[test]
fn comments_do_not_change_statements() {
    let mut quiet = builder(Dimension::TwoD, false);
    spoke_device(&mut quiet).unwrap();
    let quiet = String::from_utf8(quiet.finish().unwrap()).unwrap();

    let mut commented = builder(Dimension::TwoD, true);
    spoke_device(&mut commented).unwrap();
    let commented = String::from_utf8(commented.finish().unwrap()).unwrap();

    let strip = |script: &str| -> Vec<String> {
        script
            .lines()
            .filter(|line| !line.starts_with(';') && !line.trim().is_empty())
            .map(|line| line.replace(" ; clear any existing structure", ""))
            .collect()
    };
    assert!(commented.lines().any(|line| line == "; DOPINGS"));
    assert_eq!(strip(&quiet), strip(&commented));
}

#[test]
fn three_dimensional_device() {
    let mut builder = builder(Dimension::ThreeD, false);
    builder.preamble(false, "XX").unwrap();
    builder
        .rectangle(&Point::from((0, 0, 0)), &Point::from((1, 1, "t")), "Silicon", "body")
        .unwrap();
    builder.contacts(&[Contact::new("top", (0.5, 0.5, "t"))]).unwrap();
    builder
        .rectangular_mesh(&MeshSpec {
            name: "body".to_owned(),
            p1: Point::from((0, 0, 0)),
            p2: Point::from((1, 1, "t")),
            sizes: vec![0.1, 0.01, 0.2, 0.02, 0.3, 0.03],
            refinements: vec![],
        })
        .unwrap();
    let script = String::from_utf8(builder.finish().unwrap()).unwrap();

    assert!(!script.contains("(sde:clear)"));
    assert!(script.contains("(sdegeo:create-cuboid (position (0.000e+00) (0.000e+00) (0.000e+00)) (position (1.000e+00) (1.000e+00) (t)) \"Silicon\" \"body\")"));
    assert!(script.contains("(sdegeo:set-contact-faces (find-face-id (position (5.000e-01) (5.000e-01) (t))) \"top\")"));
    assert!(script.contains("\"Cuboid\""));
    assert!(script.contains("\"RefDef.body\" 1.000e-01 2.000e-01 3.000e-01 1.000e-02 2.000e-02 3.000e-02)"));
    assert!(!script.contains("define-refinement-function"));
}

#[test]
fn doping_must_be_defined_first() {
    let mut builder = builder(Dimension::TwoD, false);
    let err = builder
        .constant_doping(&[], &[RegionDoping::new("middle_spoke", "P_doping")])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "the doping type `P_doping` assigned to region `middle_spoke` is not defined"
    );

    builder
        .constant_doping(&[DopingType::new("P_doping", Polarity::P, "mid_doping")], &[])
        .unwrap();
    builder
        .constant_doping(&[], &[RegionDoping::new("middle_spoke", "P_doping")])
        .unwrap();
}

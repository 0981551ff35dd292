use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::{
    prelude::{predicate, PredicateBooleanExt},
    BoxPredicate,
};

const APX_INSTANCE: &str = "arg(a0).\narg(a1).\narg(a2).\natt(a0,a1).\natt(a1,a0).\natt(a1,a2).\n";

fn solve_cmd(
    instance: &str,
    reader: &str,
    args: &[&str],
    possible_answers: &[&'static str],
) -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.af")?;
    file.write_str(instance)?;
    let mut cmd = Command::cargo_bin("rhetor")?;
    cmd.arg("solve")
        .arg("-f")
        .arg(file.path())
        .arg("-r")
        .arg(reader)
        .arg("--logging-level")
        .arg("off")
        .args(args);
    let mut pred: BoxPredicate<str> = BoxPredicate::new(predicate::never());
    for a in possible_answers {
        pred = BoxPredicate::new(pred.or(predicate::eq(*a)));
    }
    cmd.assert().success().stdout(pred);
    file.close().unwrap();
    Ok(())
}

#[test]
fn test_solve_se_grounded() -> Result<(), Box<dyn std::error::Error>> {
    solve_cmd(
        "arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,c).\n",
        "apx",
        &["-p", "SE-GR"],
        &["[a,c]\n"],
    )
}

#[test]
fn test_solve_se_stable_without_extension() -> Result<(), Box<dyn std::error::Error>> {
    solve_cmd(
        "arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,c).\natt(c,a).\n",
        "apx",
        &["-p", "SE-ST"],
        &["NO\n"],
    )
}

#[test]
fn test_solve_ee_preferred() -> Result<(), Box<dyn std::error::Error>> {
    solve_cmd(
        APX_INSTANCE,
        "apx",
        &["-p", "EE-PR"],
        &["[a0,a2]\n[a1]\n", "[a1]\n[a0,a2]\n"],
    )
}

#[test]
fn test_solve_ee_cf2() -> Result<(), Box<dyn std::error::Error>> {
    solve_cmd(
        APX_INSTANCE,
        "apx",
        &["-p", "EE-CF2"],
        &["[a0,a2]\n[a1]\n", "[a1]\n[a0,a2]\n"],
    )
}

#[test]
fn test_solve_dc_complete() -> Result<(), Box<dyn std::error::Error>> {
    solve_cmd(APX_INSTANCE, "apx", &["-p", "DC-CO", "-a", "a0"], &["YES\n"])
}

#[test]
fn test_solve_dc_complete_with_certificate() -> Result<(), Box<dyn std::error::Error>> {
    solve_cmd(
        APX_INSTANCE,
        "apx",
        &["-p", "DC-CO", "-a", "a0", "--with-certificate"],
        &["YES\n[a0,a2]\n"],
    )
}

#[test]
fn test_solve_ds_complete() -> Result<(), Box<dyn std::error::Error>> {
    solve_cmd(APX_INSTANCE, "apx", &["-p", "DS-CO", "-a", "a0"], &["NO\n"])
}

#[test]
fn test_solve_ds_stable_is_vacuous_without_extension() -> Result<(), Box<dyn std::error::Error>> {
    solve_cmd(
        "arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,c).\natt(c,a).\n",
        "apx",
        &["-p", "DS-ST", "-a", "a"],
        &["YES\n"],
    )
}

#[test]
fn test_solve_iccma23_reader() -> Result<(), Box<dyn std::error::Error>> {
    solve_cmd(
        "p af 3\n1 2\n2 3\n",
        "iccma23",
        &["-p", "SE-GR"],
        &["[1,3]\n"],
    )
}

#[test]
fn test_solve_incremental_sat_acceptability() -> Result<(), Box<dyn std::error::Error>> {
    solve_cmd(
        "arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,c).\n",
        "apx",
        &["-p", "DC-CO", "--acceptability-mode", "incremental-sat"],
        &["[a,c]\n"],
    )
}

#[test]
fn test_solve_missing_arg_for_acceptance_query() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.af")?;
    file.write_str(APX_INSTANCE)?;
    let mut cmd = Command::cargo_bin("rhetor")?;
    cmd.arg("solve")
        .arg("-f")
        .arg(file.path())
        .arg("-r")
        .arg("apx")
        .arg("-p")
        .arg("DC-CO")
        .arg("--logging-level")
        .arg("off");
    cmd.assert().failure();
    file.close().unwrap();
    Ok(())
}

#[test]
fn test_solve_budget_exhaustion() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.af")?;
    file.write_str(APX_INSTANCE)?;
    let mut cmd = Command::cargo_bin("rhetor")?;
    cmd.arg("solve")
        .arg("-f")
        .arg(file.path())
        .arg("-r")
        .arg("apx")
        .arg("-p")
        .arg("EE-CF")
        .arg("--budget")
        .arg("2")
        .arg("--logging-level")
        .arg("off");
    cmd.assert().failure();
    file.close().unwrap();
    Ok(())
}

use application::UtilityApp;
use config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🚀 Utility suite demo");

    let app = UtilityApp::new(&Config::default());
    let calc = &app.calculator_service;

    println!("🧮 Calculator");
    println!("   • 7 + 5 = {}", calc.add(7, 5));
    println!("   • 10 / 4 = {}", calc.divide(10, 4)?);
    println!("   • 2^-2 = {}", calc.power(2.0, -2));
    println!("   • 5! = {}", calc.factorial(5)?);
    match calc.divide(1, 0) {
        Ok(value) => println!("   • 1 / 0 = {}", value),
        Err(e) => println!("   • 1 / 0 -> {}", e),
    }

    println!("👥 User registry");
    let users = &app.user_service;
    let alice = users.create_user("Alice", "alice@example.com", "admin").await?;
    users.create_user("Bob", "bob@mail.example.com", "user").await?;
    if let Err(e) = users.create_user("Mallory", "invalid-email", "user").await {
        println!("   • rejected Mallory: {}", e);
    }

    for user in users.get_all_users().await? {
        println!(
            "   • #{} {} <{}> admin={}",
            user.id,
            user.name,
            user.email,
            users.is_admin(&user)
        );
    }

    users.delete_user(alice.id).await?;
    println!("   • after deleting Alice: {} user(s)", users.get_all_users().await?.len());

    println!();
    println!("🏁 Demo complete!");
    Ok(())
}

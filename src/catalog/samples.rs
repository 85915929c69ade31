//! The static code samples shown on the samples view.

use super::CodeSample;

pub(super) const SAMPLES: &[CodeSample] = &[
    CodeSample {
        name: "basic",
        title: "Estrutura Básica HTML",
        subtitle: "Exemplo completo de uma página HTML básica com estrutura semântica",
        content: r##"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>Minha Página</title>
    <link rel="stylesheet" href="estilo.css">
</head>
<body>
    <header>
        <h1>Bem-vindo ao meu site</h1>
    </header>
    <nav>
        <a href="#inicio">Início</a>
        <a href="#sobre">Sobre</a>
    </nav>
    <main>
        <section id="inicio">
            <p>Esta é a seção inicial.</p>
        </section>
        <section id="sobre">
            <p>Sobre mim.</p>
        </section>
    </main>
    <footer>
        <p>Todos os direitos reservados.</p>
    </footer>
</body>
</html>"##,
    },
    CodeSample {
        name: "css",
        title: "CSS Básico",
        subtitle: "Exemplo de estilização CSS para a estrutura HTML acima",
        content: r#"body {
    font-family: Arial, sans-serif;
    margin: 0;
    padding: 0;
    background-color: #f5f5f5;
}

header, footer {
    background-color: #333;
    color: white;
    padding: 10px;
    text-align: center;
}

nav {
    background-color: #444;
    padding: 10px;
    text-align: center;
}

nav a {
    color: white;
    margin: 0 10px;
    text-decoration: none;
}

main {
    padding: 20px;
}

section {
    margin-bottom: 20px;
}"#,
    },
];
